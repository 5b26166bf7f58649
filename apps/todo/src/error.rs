//! Error types for the todo API client

use thiserror::Error;

/// Outcome of a failed API call
///
/// `NotFound` is kept apart from other statuses because the synchronized
/// store treats it as drift to converge on, not as a failure, when it answers
/// an update or a delete.
///
/// Errors travel inside response actions, so they are `Clone` and compare by
/// value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The server has no item at that path (HTTP 404)
    #[error("not found (status 404)")]
    NotFound,

    /// The server answered with any other non-success status
    #[error("server responded with status {status}")]
    Status {
        /// HTTP status code
        status: u16,
    },

    /// The request never produced a response (connection refused, reset, ...)
    #[error("request failed: {0}")]
    Transport(String),

    /// The response body was not the expected JSON
    #[error("invalid response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// Returns true for the distinguished "not found" outcome
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }

    /// HTTP status code, when the server answered at all
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::NotFound => Some(404),
            Self::Status { status } => Some(*status),
            Self::Transport(_) | Self::Decode(_) => None,
        }
    }

    /// Maps a non-success HTTP status to an error
    #[must_use]
    pub const fn from_status(status: u16) -> Self {
        if status == 404 {
            Self::NotFound
        } else {
            Self::Status { status }
        }
    }
}
