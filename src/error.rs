//! # Error Taxonomy
//!
//! Errors raised by the selection engine and its collaborators. Every variant
//! is returned to the immediate caller; nothing here is retried because no
//! condition in this domain is transient.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WhaleError {
    /// A listing row did not carry enough fields to build a container.
    #[error("malformed record: expected at least 3 fields, found {found} in {line:?}")]
    MalformedRecord { line: String, found: usize },

    /// Commit was requested on a list with no items.
    #[error("nothing to select: the list is empty")]
    EmptySelection,

    /// The clipboard collaborator could not store the payload.
    #[error("clipboard unavailable: {0}")]
    ClipboardUnavailable(String),

    /// The configuration document could not be read or validated.
    #[error("invalid configuration: {0}")]
    ConfigurationInvalid(String),

    #[error("{0} is not installed")]
    RuntimeNotInstalled(String),

    #[error("{0} is not running")]
    RuntimeNotRunning(String),

    #[error("failed to list containers: {0}")]
    ListingFailed(String),
}

pub type Result<T> = std::result::Result<T, WhaleError>;
