use std::time::{Duration, Instant};

use mock_api::faults::Fault;
use reqwest::StatusCode;

use test_helpers::spawn_app;

#[tokio::test]
async fn status_fault_replaces_response() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.fail_with("/users", 418).await;

    let url = format!("{}/users", app.client.address);
    let response = app.client.inner_client.get(&url).send().await?;
    assert_eq!(response.status(), StatusCode::IM_A_TEAPOT);

    // other paths are unaffected
    let url = format!("{}/albums", app.client.address);
    let response = app.client.inner_client.get(&url).send().await?;
    assert_eq!(response.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
async fn cleared_fault_restores_normal_response() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.fail_with("/albums", 500).await;
    app.state.faults.clear("/albums").await;

    let albums = app.client.list_albums().await?;
    assert_eq!(albums, app.store().albums().await);

    Ok(())
}

#[tokio::test]
async fn delayed_fault_keeps_body() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.state
        .faults
        .set(
            "/albums",
            Fault::body("[]").with_delay(Duration::from_millis(100)),
        )
        .await;

    let started = Instant::now();
    let albums = app.client.list_albums().await?;
    assert!(started.elapsed() >= Duration::from_millis(100));
    assert!(albums.is_empty());

    Ok(())
}
