mod albums;
mod errors;
mod fetch;
mod users;

use test_helpers::spawn_app;

#[tokio::test]
async fn client_uses_configured_base_url() -> anyhow::Result<()> {
    let app = spawn_app().await;

    assert_eq!(app.client.address, app.config.base_url());
    let posts = app.client.list_posts().await?;
    assert!(!posts.is_empty());

    Ok(())
}
