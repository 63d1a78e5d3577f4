use thiserror::Error;

use crate::generate::GenerateError;
use crate::store::StoreError;

/// Session-boundary error type.
///
/// The pure modules (`history`, `diff`, `privacy`) never return errors;
/// failures only arise at the collaborator seams the session talks to.
/// A generation failure is retryable: it never corrupts history state.
#[derive(Debug, Error)]
pub enum EditorError {
    #[error("Generation error: {0}")]
    Generation(#[from] GenerateError),

    #[error("Storage error: {0}")]
    Storage(#[from] StoreError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}
