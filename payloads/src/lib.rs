pub mod api_client;
pub mod config;
pub mod fetch;
pub mod requests;
pub mod responses;
pub mod search;

pub use api_client::{APIClient, ClientError};
pub use config::{API_URL_VAR, ClientConfig, ConfigError};
pub use fetch::{FetchState, RequestToken, Settlement};
pub use responses::{Address, Album, Company, Post, User};

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Id type wrappers keep ids of different resources from being mixed up.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize,
)]
pub struct PostId(pub i64);

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize,
)]
pub struct UserId(pub i64);

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize,
)]
pub struct AlbumId(pub i64);
