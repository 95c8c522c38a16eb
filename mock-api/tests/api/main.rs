mod faults;
mod posts;

use test_helpers::spawn_app;

#[tokio::test]
async fn health_check() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let url = format!("{}/health_check", app.client.address);
    let response = app.client.inner_client.get(&url).send().await?;
    assert!(response.status().is_success());
    assert_eq!(response.text().await?, "healthy");

    Ok(())
}

#[tokio::test]
async fn cross_origin_requests_are_allowed() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let url = format!("{}/posts", app.client.address);
    let response = app
        .client
        .inner_client
        .get(&url)
        .header("Origin", "http://127.0.0.1:8080")
        .send()
        .await?;

    let allowed = response
        .headers()
        .get("access-control-allow-origin")
        .expect("CORS header should be present")
        .to_str()?;
    assert_eq!(allowed, "http://127.0.0.1:8080");

    Ok(())
}
