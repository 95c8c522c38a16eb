use std::sync::Arc;

use payloads::{Album, Post, PostId, User, requests::NewPost};
use tokio::sync::RwLock;

/// Everything the api serves.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    pub posts: Vec<Post>,
    pub users: Vec<User>,
    pub albums: Vec<Album>,
}

/// In-memory records behind the routes. Clones share the same data, so a
/// test can reseed the store of a running server.
#[derive(Debug, Clone, Default)]
pub struct Store {
    inner: Arc<RwLock<Dataset>>,
}

impl Store {
    pub fn new(dataset: Dataset) -> Self {
        Self {
            inner: Arc::new(RwLock::new(dataset)),
        }
    }

    pub fn with_fixtures() -> Self {
        Self::new(crate::fixtures::dataset())
    }

    pub async fn posts(&self) -> Vec<Post> {
        self.inner.read().await.posts.clone()
    }

    pub async fn post(&self, id: PostId) -> Option<Post> {
        self.inner
            .read()
            .await
            .posts
            .iter()
            .find(|post| post.id == id)
            .cloned()
    }

    /// Store a new post under the next free id.
    pub async fn create_post(&self, details: NewPost) -> Post {
        let mut dataset = self.inner.write().await;
        let next_id =
            dataset.posts.iter().map(|p| p.id.0).max().unwrap_or(0) + 1;
        let post = Post {
            id: PostId(next_id),
            user_id: details.user_id,
            title: details.title,
            body: details.body,
        };
        dataset.posts.push(post.clone());
        post
    }

    pub async fn users(&self) -> Vec<User> {
        self.inner.read().await.users.clone()
    }

    pub async fn albums(&self) -> Vec<Album> {
        self.inner.read().await.albums.clone()
    }

    pub async fn set_posts(&self, posts: Vec<Post>) {
        self.inner.write().await.posts = posts;
    }

    pub async fn set_users(&self, users: Vec<User>) {
        self.inner.write().await.users = users;
    }

    pub async fn set_albums(&self, albums: Vec<Album>) {
        self.inner.write().await.albums = albums;
    }
}
