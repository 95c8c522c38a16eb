use reqwest::StatusCode;

use test_helpers::spawn_app;

#[tokio::test]
async fn unknown_post_answers_empty_object() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let url = format!("{}/posts/4242", app.client.address);
    let response = app.client.inner_client.get(&url).send().await?;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        response.json::<serde_json::Value>().await?,
        serde_json::json!({})
    );

    Ok(())
}

#[tokio::test]
async fn created_post_gets_next_id() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let highest = app
        .store()
        .posts()
        .await
        .iter()
        .map(|p| p.id.0)
        .max()
        .unwrap_or(0);

    let url = format!("{}/posts", app.client.address);
    let response = app
        .client
        .inner_client
        .post(&url)
        .json(&serde_json::json!({"title": "t", "body": "b", "userId": 1}))
        .send()
        .await?;
    assert_eq!(response.status(), StatusCode::CREATED);

    let created = response.json::<serde_json::Value>().await?;
    assert_eq!(created["id"], highest + 1);
    assert_eq!(created["userId"], 1);

    Ok(())
}

#[tokio::test]
async fn malformed_post_body_is_rejected() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let url = format!("{}/posts", app.client.address);
    let response = app
        .client
        .inner_client
        .post(&url)
        .header("Content-Type", "application/json")
        .body("{\"title\": 1}")
        .send()
        .await?;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app
        .client
        .inner_client
        .post(&url)
        .json(&serde_json::json!({"title": "t", "body": " ", "userId": 1}))
        .send()
        .await?;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(response.text().await?, "Title dan body wajib di isi");

    Ok(())
}
