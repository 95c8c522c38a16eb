use crate::UserId;
use serde::{Deserialize, Serialize};

/// Every post created from the ui is attributed to this user.
pub const DEFAULT_AUTHOR: UserId = UserId(1);

/// Body of `POST /posts`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPost {
    pub title: String,
    pub body: String,
    pub user_id: UserId,
}

/// Reasons a post is refused before it is sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InvalidPost {
    #[error("Title dan body wajib di isi")]
    EmptyTitle,
    #[error("Title dan body wajib di isi")]
    EmptyBody,
}

impl NewPost {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            user_id: DEFAULT_AUTHOR,
        }
    }

    /// Both the title and the body must contain something other than
    /// whitespace.
    pub fn validate(&self) -> Result<(), InvalidPost> {
        if self.title.trim().is_empty() {
            return Err(InvalidPost::EmptyTitle);
        }
        if self.body.trim().is_empty() {
            return Err(InvalidPost::EmptyBody);
        }
        Ok(())
    }
}
