use payloads::{Album, AlbumId, ClientError, UserId};

use test_helpers::spawn_app;

#[tokio::test]
async fn get_returns_parsed_body_on_success() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let album = Album {
        id: AlbumId(1),
        title: "foo".into(),
        user_id: UserId(2),
    };
    app.store().set_albums(vec![album.clone()]).await;

    let albums: Vec<Album> = app.client.get("/albums").await?;
    assert_eq!(albums, vec![album]);

    Ok(())
}

#[tokio::test]
async fn list_albums_returns_fixtures() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let albums = app.client.list_albums().await?;
    assert_eq!(albums, app.store().albums().await);

    Ok(())
}

#[tokio::test]
async fn get_into_raw_json_value_returns_body_as_sent() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.respond_with_body("/albums", "[]").await;

    let raw: serde_json::Value = app.client.get("/albums").await?;
    assert_eq!(raw, serde_json::json!([]));

    Ok(())
}

#[tokio::test]
async fn valid_json_of_wrong_shape_is_a_decode_error() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.respond_with_body("/albums", r#"[{"id":"x"}]"#).await;

    let result = app.client.get::<Vec<Album>>("/albums").await;
    match result {
        Err(ClientError::Decode { ref path, .. }) => {
            assert_eq!(path, "/albums")
        }
        other => panic!("Expected Decode error, got {other:?}"),
    }

    Ok(())
}
