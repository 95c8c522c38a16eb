use crate::{Album, ClientConfig, Post, PostId, User, requests};
use reqwest::StatusCode;
use serde::{Serialize, de::DeserializeOwned};

/// An API client for a JSON REST backend rooted at one base URL.
///
/// Construction requires a validated [`ClientConfig`], so a missing base URL
/// is caught before the first request. Calls are not retried, cached or
/// given a timeout.
#[derive(Debug, Clone)]
pub struct APIClient {
    pub address: String,
    pub inner_client: reqwest::Client,
}

impl APIClient {
    pub fn new(config: &ClientConfig) -> Self {
        Self::with_client(config, reqwest::Client::new())
    }

    pub fn with_client(
        config: &ClientConfig,
        inner_client: reqwest::Client,
    ) -> Self {
        Self {
            address: config.base_url().to_string(),
            inner_client,
        }
    }
}

/// Generic http actions
impl APIClient {
    fn format_url(&self, path: &str) -> String {
        format!("{}{path}", &self.address)
    }

    /// GET `path` and decode the JSON body as `T`.
    ///
    /// The body is only checked to be valid JSON of the requested shape;
    /// there is no further validation.
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<T, ClientError> {
        tracing::debug!(path, "GET");
        let response = self
            .inner_client
            .get(self.format_url(path))
            .send()
            .await
            .map_err(|source| ClientError::transport(path, source))?;
        ok_body(path, response).await
    }

    /// POST `body` as JSON to `path` and decode the JSON response as `T`.
    pub async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &impl Serialize,
    ) -> Result<T, ClientError> {
        tracing::debug!(path, "POST");
        // `json` also sets `Content-Type: application/json`
        let response = self
            .inner_client
            .post(self.format_url(path))
            .json(body)
            .send()
            .await
            .map_err(|source| ClientError::transport(path, source))?;
        ok_body(path, response).await
    }
}

/// Resource endpoints
impl APIClient {
    pub async fn list_posts(&self) -> Result<Vec<Post>, ClientError> {
        self.get("/posts").await
    }

    pub async fn get_post(&self, id: PostId) -> Result<Post, ClientError> {
        self.get(&format!("/posts/{id}")).await
    }

    /// Create a post, returning it with the id the api assigned.
    pub async fn create_post(
        &self,
        details: &requests::NewPost,
    ) -> Result<Post, ClientError> {
        self.post("/posts", details).await
    }

    pub async fn list_users(&self) -> Result<Vec<User>, ClientError> {
        self.get("/users").await
    }

    pub async fn list_albums(&self) -> Result<Vec<Album>, ClientError> {
        self.get("/albums").await
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The api answered with a non-2xx status.
    #[error("Gagal fetch {path}. Status: {}", .status.as_u16())]
    Request { path: String, status: StatusCode },
    /// The request never produced a response.
    #[error("{source}")]
    Transport {
        path: String,
        #[source]
        source: reqwest::Error,
    },
    /// A 2xx response whose body was not the expected JSON.
    #[error("{source}")]
    Decode {
        path: String,
        #[source]
        source: reqwest::Error,
    },
}

impl ClientError {
    fn transport(path: &str, source: reqwest::Error) -> Self {
        Self::Transport {
            path: path.to_string(),
            source,
        }
    }

    /// The endpoint the failed call was made against.
    pub fn path(&self) -> &str {
        match self {
            Self::Request { path, .. }
            | Self::Transport { path, .. }
            | Self::Decode { path, .. } => path,
        }
    }

    /// The response status, when the api answered with one.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Request { status, .. } => Some(*status),
            Self::Transport { .. } | Self::Decode { .. } => None,
        }
    }
}

/// Deserialize a successful response into the desired type, or return an
/// appropriate error.
async fn ok_body<T: DeserializeOwned>(
    path: &str,
    response: reqwest::Response,
) -> Result<T, ClientError> {
    let status = response.status();
    if !status.is_success() {
        tracing::debug!(path, %status, "request refused");
        return Err(ClientError::Request {
            path: path.to_string(),
            status,
        });
    }
    response.json::<T>().await.map_err(|source| {
        if source.is_decode() {
            ClientError::Decode {
                path: path.to_string(),
                source,
            }
        } else {
            ClientError::transport(path, source)
        }
    })
}
