#![forbid(unsafe_code)]

//! Error types for the fetch and persist collaborators.
//!
//! Every persistence failure — network, validation (e.g. an id-set
//! mismatch), authorization — is handled identically by the engine: full
//! rollback to the pre-drag snapshot. The kind is carried for logging and
//! display, not for control flow; the only recoverable outcome is "try the
//! drag again".

use std::error::Error;
use std::fmt;

/// Why a reorder persistence call failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CommitErrorKind {
    /// Transport-level failure; the request may never have arrived.
    Network,
    /// The backend rejected the request (e.g. id set does not match its
    /// known set).
    Validation,
    /// The session is not allowed to reorder this collection.
    Authorization,
    /// Anything else the backend surfaced.
    Other,
}

impl CommitErrorKind {
    fn as_str(self) -> &'static str {
        match self {
            Self::Network => "network",
            Self::Validation => "validation",
            Self::Authorization => "authorization",
            Self::Other => "other",
        }
    }
}

/// A failed reorder persistence call.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CommitError {
    kind: CommitErrorKind,
    message: Option<String>,
}

impl CommitError {
    /// A failure with a server-surfaced message.
    #[must_use]
    pub fn new(kind: CommitErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: Some(message.into()),
        }
    }

    /// A failure with no usable message from the server.
    #[must_use]
    pub fn bare(kind: CommitErrorKind) -> Self {
        Self {
            kind,
            message: None,
        }
    }

    /// Shorthand for a network failure.
    #[must_use]
    pub fn network(message: impl Into<String>) -> Self {
        Self::new(CommitErrorKind::Network, message)
    }

    /// Shorthand for a validation rejection.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(CommitErrorKind::Validation, message)
    }

    /// Failure kind.
    #[must_use]
    pub fn kind(&self) -> CommitErrorKind {
        self.kind
    }

    /// Server-surfaced message, if any.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

impl fmt::Display for CommitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message {
            Some(message) => write!(f, "reorder rejected ({}): {message}", self.kind.as_str()),
            None => write!(f, "reorder rejected ({})", self.kind.as_str()),
        }
    }
}

impl Error for CommitError {}

/// A failed list fetch.
///
/// The engine takes no corrective action beyond surfacing a notice; the
/// previous working copy stays intact.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FetchError {
    message: Option<String>,
}

impl FetchError {
    /// A fetch failure with a message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
        }
    }

    /// A fetch failure with no message.
    #[must_use]
    pub fn bare() -> Self {
        Self { message: None }
    }

    /// Surfaced message, if any.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message {
            Some(message) => write!(f, "list fetch failed: {message}"),
            None => write!(f, "list fetch failed"),
        }
    }
}

impl Error for FetchError {}
