//! Assertion failures
//!
//! A reported snapshot mismatch is a distinct variant from an engine error
//! so callers can tell "the response changed" from "the check could not run".

use bodysnap_core::errors::SnapError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssertionFailure {
    #[error("Body test for url '{url}' failed.\n See this diff for more detail:\n\n{diff}")]
    Snapshot { url: String, diff: String },

    #[error("Field '{path}' failed: {message}")]
    Field { path: String, message: String },

    #[error("{message}")]
    Body { message: String },

    #[error(transparent)]
    Engine(#[from] SnapError),
}

impl AssertionFailure {
    /// Whether this failure is a reported snapshot mismatch
    pub fn is_snapshot_mismatch(&self) -> bool {
        matches!(self, AssertionFailure::Snapshot { .. })
    }

    /// The mismatch diff, if this is a snapshot failure
    pub fn diff(&self) -> Option<&str> {
        match self {
            AssertionFailure::Snapshot { diff, .. } => Some(diff),
            _ => None,
        }
    }

    pub(crate) fn body(message: impl Into<String>) -> Self {
        AssertionFailure::Body {
            message: message.into(),
        }
    }
}
