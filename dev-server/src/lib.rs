//! Upstream selection for the development server.

use anyhow::Context;
use payloads::{APIClient, ClientConfig, ConfigError};

/// Where the ui should send its requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Upstream {
    /// `API_URL` is set; use that api as is.
    Configured(ClientConfig),
    /// `API_URL` is unset; serve the mock api with fixtures.
    Mock,
}

impl Upstream {
    /// Read `API_URL` from the environment (after `.env` is loaded).
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::resolve(ClientConfig::from_env())
    }

    /// An absent base URL falls back to the mock; a malformed one is an
    /// error.
    pub fn resolve(
        config: Result<ClientConfig, ConfigError>,
    ) -> Result<Self, ConfigError> {
        match config {
            Ok(config) => Ok(Self::Configured(config)),
            Err(ConfigError::MissingBaseUrl { .. }) => Ok(Self::Mock),
            Err(e) => Err(e),
        }
    }
}

/// Number of records the upstream serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Inventory {
    pub posts: usize,
    pub users: usize,
    pub albums: usize,
}

/// Make sure the upstream answers every listing the ui needs.
pub async fn check_upstream(client: &APIClient) -> anyhow::Result<Inventory> {
    let posts = client
        .list_posts()
        .await
        .context("upstream did not answer /posts")?;
    let users = client
        .list_users()
        .await
        .context("upstream did not answer /users")?;
    let albums = client
        .list_albums()
        .await
        .context("upstream did not answer /albums")?;

    Ok(Inventory {
        posts: posts.len(),
        users: users.len(),
        albums: albums.len(),
    })
}
