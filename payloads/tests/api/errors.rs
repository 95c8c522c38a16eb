use payloads::{Album, ClientError, requests::NewPost};
use reqwest::StatusCode;

use test_helpers::{spawn_app, unreachable_client};

#[tokio::test]
async fn non_success_status_names_path_and_code() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.fail_with("/albums", 404).await;

    let error = app.client.list_albums().await.unwrap_err();
    assert!(matches!(error, ClientError::Request { .. }));
    assert_eq!(error.path(), "/albums");
    assert_eq!(error.status(), Some(StatusCode::NOT_FOUND));
    assert_eq!(error.to_string(), "Gagal fetch /albums. Status: 404");

    Ok(())
}

#[tokio::test]
async fn server_errors_are_request_errors() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.fail_with("/users", 503).await;

    let error = app.client.list_users().await.unwrap_err();
    assert_eq!(error.status(), Some(StatusCode::SERVICE_UNAVAILABLE));
    assert!(error.to_string().contains("/users"));
    assert!(error.to_string().contains("503"));

    Ok(())
}

#[tokio::test]
async fn post_failure_names_path_and_code() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.fail_with("/posts", 500).await;

    let error = app
        .client
        .create_post(&NewPost::new("judul", "isi"))
        .await
        .unwrap_err();
    assert_eq!(error.to_string(), "Gagal fetch /posts. Status: 500");

    Ok(())
}

#[tokio::test]
async fn invalid_json_is_a_decode_error() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.respond_with_body("/albums", "this is not json").await;

    let error = app.client.get::<Vec<Album>>("/albums").await.unwrap_err();
    assert!(matches!(error, ClientError::Decode { .. }), "{error:?}");
    assert_eq!(error.path(), "/albums");
    assert_eq!(error.status(), None);
    assert!(!error.to_string().is_empty());

    Ok(())
}

#[tokio::test]
async fn unreachable_host_is_a_transport_error() -> anyhow::Result<()> {
    let client = unreachable_client();

    let error = client.get::<Vec<Album>>("/albums").await.unwrap_err();
    assert!(matches!(error, ClientError::Transport { .. }), "{error:?}");
    assert_eq!(error.path(), "/albums");
    assert!(!error.to_string().is_empty());

    Ok(())
}
