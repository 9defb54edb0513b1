//! Error types for the sync layer.

use thiserror::Error;

/// Result type for sync operations.
pub type SyncResult<T> = Result<T, SyncError>;

/// Errors that can occur in sync operations.
///
/// `Transport`, `Protocol` and `Rejected` are recovered inside the
/// controller and surfaced as notifications. `Precondition` marks a caller
/// bug and is returned to the caller instead.
#[derive(Debug, Error)]
pub enum SyncError {
    /// The service could not be reached.
    #[error("transport error: {0}")]
    Transport(String),

    /// The service answered with a body we could not understand.
    #[error("protocol error: {0}")]
    Protocol(String),

    /// The service answered with a non-success status.
    #[error("service rejected request ({status}){}", message_suffix(.message))]
    Rejected { status: u16, message: Option<String> },

    /// An operation was invoked with an invalid kind/id combination.
    #[error("precondition violated: {0}")]
    Precondition(String),

    /// Invalid client configuration.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Record or draft type error.
    #[error(transparent)]
    Types(#[from] menagerie_types::Error),
}

fn message_suffix(message: &Option<String>) -> String {
    message.as_deref().map(|m| format!(": {m}")).unwrap_or_default()
}

impl SyncError {
    /// The human-readable message supplied by the service, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            SyncError::Rejected { message, .. } => {
                message.as_deref().filter(|m| !m.trim().is_empty())
            }
            _ => None,
        }
    }

    /// Returns true for failures reaching or understanding the service.
    pub fn is_transport(&self) -> bool {
        matches!(self, SyncError::Transport(_) | SyncError::Protocol(_))
    }

    /// Returns true if the service answered with a non-success status.
    pub fn is_rejection(&self) -> bool {
        matches!(self, SyncError::Rejected { .. })
    }

    /// Text to show the end user: the service message, else `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        self.server_message().unwrap_or(fallback).to_string()
    }
}
