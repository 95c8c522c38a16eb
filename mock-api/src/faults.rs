//! Per-path misbehaviour for exercising client failure handling.
//!
//! A [`Fault`] registered for a request path is applied by every route
//! serving that path until it is cleared.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use actix_web::{HttpResponse, http::StatusCode, http::header::ContentType};
use tokio::sync::Mutex;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fault {
    /// Answer with this status instead of the normal response.
    pub status: Option<u16>,
    /// Answer with this raw body instead of the normal one.
    pub body: Option<String>,
    /// Wait this long before answering.
    pub delay: Option<Duration>,
}

impl Fault {
    pub fn status(code: u16) -> Self {
        Self {
            status: Some(code),
            ..Self::default()
        }
    }

    pub fn body(raw: impl Into<String>) -> Self {
        Self {
            body: Some(raw.into()),
            ..Self::default()
        }
    }

    pub fn delay(delay: Duration) -> Self {
        Self {
            delay: Some(delay),
            ..Self::default()
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct Faults {
    inner: Arc<Mutex<HashMap<String, Fault>>>,
}

impl Faults {
    pub async fn set(&self, path: impl Into<String>, fault: Fault) {
        self.inner.lock().await.insert(path.into(), fault);
    }

    pub async fn clear(&self, path: &str) {
        self.inner.lock().await.remove(path);
    }

    pub async fn clear_all(&self) {
        self.inner.lock().await.clear();
    }

    /// Apply the fault registered for `path`, if any.
    ///
    /// Sleeps out any delay, then returns the replacement response. Returns
    /// `None` when the route should answer normally.
    pub async fn intercept(&self, path: &str) -> Option<HttpResponse> {
        // the lock is released before sleeping
        let fault = self.inner.lock().await.get(path).cloned()?;
        if let Some(delay) = fault.delay {
            tracing::debug!(path, ?delay, "delaying response");
            actix_web::rt::time::sleep(delay).await;
        }

        let status = match fault.status {
            Some(code) => match StatusCode::from_u16(code) {
                Ok(status) => Some(status),
                Err(e) => {
                    tracing::warn!(path, code, "ignoring fault status: {e}");
                    None
                }
            },
            None => None,
        };
        if status.is_none() && fault.body.is_none() {
            return None;
        }

        tracing::debug!(path, ?status, "answering with injected fault");
        let body = fault.body.unwrap_or_else(|| "{}".to_string());
        Some(
            HttpResponse::build(status.unwrap_or(StatusCode::OK))
                .content_type(ContentType::json())
                .body(body),
        )
    }
}
