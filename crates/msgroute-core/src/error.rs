//! Error types for message routing.

use thiserror::Error;

/// Result type alias for routing operations.
pub type RouteResult<T> = Result<T, RouteError>;

/// Errors that can occur while turning a message request into routes.
#[derive(Debug, Error)]
pub enum RouteError {
    /// Request body has the wrong shape (undecodable, empty message, no recipients).
    #[error("{0}")]
    MalformedInput(String),

    #[error("Got {actual} recipients, but maximum allowed is {max}")]
    TooManyRecipients { actual: usize, max: usize },

    #[error("Invalid phone number {0}")]
    InvalidRecipient(String),

    #[error("invalid tier schedule: {0}")]
    InvalidSchedule(String),

    #[error("allocation uses tier {capacity}, which is not in the schedule")]
    UnknownTier { capacity: usize },

    #[error("allocation covers {allocated} recipients but {recipients} were given")]
    AllocationMismatch { allocated: usize, recipients: usize },

    #[error("serialization error: {0}")]
    Serialization(String),
}

impl RouteError {
    /// Whether the caller caused this error (HTTP 400) as opposed to the server (HTTP 500).
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            RouteError::MalformedInput(_)
                | RouteError::TooManyRecipients { .. }
                | RouteError::InvalidRecipient(_)
        )
    }
}

impl From<serde_json::Error> for RouteError {
    fn from(e: serde_json::Error) -> Self {
        RouteError::Serialization(e.to_string())
    }
}
