//! Request lifecycle state for one view.
//!
//! A [`FetchState`] tracks a single resource through repeated request
//! cycles. Every cycle is started with [`FetchState::begin`], which hands
//! out a fresh [`RequestToken`], and finished with [`FetchState::settle`].
//! Only the outcome carrying the newest token is applied; a cycle that was
//! overtaken by a later `begin` settles as [`Settlement::Stale`] and leaves
//! the state alone, so overlapping refetches cannot overwrite newer data with
//! older data. Once the owning view is gone ([`FetchState::detach`]) every
//! outcome is dropped.
//!
//! The state is only ever touched from one thread. The ui keeps it in an
//! `Rc<RefCell<_>>` and awaits requests with [`drive`].

use std::cell::RefCell;
use std::fmt::Display;
use std::future::Future;

use crate::ClientError;

/// Shown when a failure renders to an empty message.
pub const UNKNOWN_ERROR: &str = "An unknown error occurred";

/// Identity of one request cycle. Tokens only grow and are only handed out
/// by [`FetchState::begin`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

impl RequestToken {
    /// Held by a state before its first cycle; never issued.
    const UNISSUED: Self = Self(0);
}

/// What happened to an outcome handed to [`FetchState::settle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settlement {
    /// The outcome belonged to the latest cycle and was stored.
    Applied,
    /// A newer cycle was started after this one; the outcome was dropped.
    Stale,
    /// The owner was torn down; the outcome was dropped.
    Detached,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FetchState<T, E = ClientError> {
    data: Option<T>,
    loading: bool,
    error: Option<E>,
    latest: RequestToken,
    detached: bool,
}

impl<T, E> Default for FetchState<T, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, E> FetchState<T, E> {
    /// A new state is loading and has neither data nor an error; the first
    /// cycle is expected to start right away.
    pub fn new() -> Self {
        Self {
            data: None,
            loading: true,
            error: None,
            latest: RequestToken::UNISSUED,
            detached: false,
        }
    }

    /// Start a new cycle, superseding any cycle still in flight.
    ///
    /// The previous error is cleared. Previous data stays visible until the
    /// new cycle settles.
    pub fn begin(&mut self) -> RequestToken {
        self.latest = RequestToken(self.latest.0 + 1);
        self.loading = true;
        self.error = None;
        self.latest
    }

    /// Record the outcome of the cycle identified by `token`.
    ///
    /// A failure leaves earlier data untouched. Each cycle settles at most
    /// once; a repeated settlement is dropped like a superseded one.
    pub fn settle(
        &mut self,
        token: RequestToken,
        outcome: Result<T, E>,
    ) -> Settlement {
        if self.detached {
            return Settlement::Detached;
        }
        if token != self.latest {
            tracing::debug!(
                ?token,
                latest = ?self.latest,
                "dropping outcome of superseded request"
            );
            return Settlement::Stale;
        }
        if token == RequestToken::UNISSUED || !self.loading {
            tracing::debug!(?token, "dropping outcome of settled request");
            return Settlement::Stale;
        }

        match outcome {
            Ok(data) => {
                self.data = Some(data);
                self.error = None;
            }
            Err(error) => {
                self.error = Some(error);
            }
        }
        self.loading = false;
        Settlement::Applied
    }

    /// Mark the owner as gone. Requests still in flight will finish, but
    /// their outcomes are ignored.
    pub fn detach(&mut self) {
        self.detached = true;
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn error(&self) -> Option<&E> {
        self.error.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_detached(&self) -> bool {
        self.detached
    }

    /// Token of the newest cycle. Before the first cycle this is a token no
    /// outcome can be settled under.
    pub fn latest(&self) -> RequestToken {
        self.latest
    }
}

impl<T, E: Display> FetchState<T, E> {
    /// The error rendered for display.
    pub fn error_message(&self) -> Option<String> {
        self.error.as_ref().map(|error| {
            let message = error.to_string();
            if message.trim().is_empty() {
                UNKNOWN_ERROR.to_string()
            } else {
                message
            }
        })
    }
}

/// Await `request` and settle its outcome under `token`.
///
/// The cell is not borrowed while the request is pending, so other cycles
/// can begin in the meantime.
pub async fn drive<T, E, Fut>(
    state: &RefCell<FetchState<T, E>>,
    token: RequestToken,
    request: Fut,
) -> Settlement
where
    Fut: Future<Output = Result<T, E>>,
{
    let outcome = request.await;
    state.borrow_mut().settle(token, outcome)
}
