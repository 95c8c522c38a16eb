use std::cell::RefCell;
use std::time::Duration;

use payloads::{
    Album, AlbumId, FetchState, Post, PostId, Settlement, UserId, fetch::drive,
};

use test_helpers::spawn_app;

fn foo_album() -> Album {
    Album {
        id: AlbumId(1),
        title: "foo".into(),
        user_id: UserId(2),
    }
}

#[tokio::test]
async fn cycle_against_live_api_settles_with_data() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.store().set_albums(vec![foo_album()]).await;

    let state = RefCell::new(FetchState::<Vec<Album>>::new());
    assert!(state.borrow().is_loading());
    assert!(state.borrow().data().is_none());
    assert!(state.borrow().error().is_none());

    let token = state.borrow_mut().begin();
    let settlement = drive(&state, token, app.client.get("/albums")).await;

    assert_eq!(settlement, Settlement::Applied);
    let state = state.borrow();
    assert!(!state.is_loading());
    assert_eq!(state.data(), Some(&vec![foo_album()]));
    assert!(state.error().is_none());

    Ok(())
}

#[tokio::test]
async fn failed_refetch_keeps_previous_data() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.store().set_albums(vec![foo_album()]).await;
    let state = RefCell::new(FetchState::<Vec<Album>>::new());

    let token = state.borrow_mut().begin();
    drive(&state, token, app.client.get("/albums")).await;

    app.fail_with("/albums", 404).await;
    let token = state.borrow_mut().begin();
    assert!(state.borrow().is_loading());
    let settlement = drive(&state, token, app.client.get("/albums")).await;

    assert_eq!(settlement, Settlement::Applied);
    let state = state.borrow();
    assert!(!state.is_loading());
    assert_eq!(state.data(), Some(&vec![foo_album()]));
    assert_eq!(
        state.error_message().as_deref(),
        Some("Gagal fetch /albums. Status: 404")
    );
    assert_eq!(
        state.error().and_then(|e| e.status()).map(|s| s.as_u16()),
        Some(404)
    );

    Ok(())
}

#[tokio::test]
async fn retry_after_failure_recovers() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.fail_with("/users", 500).await;
    let state = RefCell::new(FetchState::<Vec<payloads::User>>::new());

    let token = state.borrow_mut().begin();
    drive(&state, token, app.client.get("/users")).await;
    assert!(state.borrow().error().is_some());
    assert!(state.borrow().data().is_none());

    app.reset_faults().await;
    let token = state.borrow_mut().begin();
    assert!(state.borrow().error().is_none());
    drive(&state, token, app.client.get("/users")).await;

    assert!(state.borrow().error().is_none());
    assert_eq!(
        state.borrow().data().map(Vec::len),
        Some(app.store().users().await.len())
    );

    Ok(())
}

#[tokio::test]
async fn slow_superseded_request_does_not_overwrite_newer_result()
-> anyhow::Result<()> {
    let app = spawn_app().await;
    app.delay("/posts/1", Duration::from_millis(300)).await;
    let state = RefCell::new(FetchState::<Post>::new());

    // the view switches from post 1 to post 2 while post 1 is still loading
    let first = state.borrow_mut().begin();
    let second = state.borrow_mut().begin();
    let (old, new) = tokio::join!(
        drive(&state, first, app.client.get("/posts/1")),
        drive(&state, second, app.client.get("/posts/2")),
    );

    assert_eq!(old, Settlement::Stale);
    assert_eq!(new, Settlement::Applied);
    assert_eq!(state.borrow().data().map(|p| p.id), Some(PostId(2)));
    assert!(!state.borrow().is_loading());

    Ok(())
}

#[tokio::test]
async fn result_arriving_after_teardown_is_ignored() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let state = RefCell::new(FetchState::<Vec<Album>>::new());

    let token = state.borrow_mut().begin();
    let request = app.client.get("/albums");
    state.borrow_mut().detach();
    let settlement = drive(&state, token, request).await;

    assert_eq!(settlement, Settlement::Detached);
    assert!(state.borrow().data().is_none());

    Ok(())
}
