//! Generation-service boundary.
//!
//! The external service takes a document plus a rewrite instruction and
//! returns a revised document. Transport, retries, and prompt construction
//! live in implementations outside this crate; the core's only obligations
//! around the call are anonymize-before and restore-after when privacy
//! mode is active (see `session`).

use async_trait::async_trait;
use thiserror::Error;

use crate::models::Resume;

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("generation service call failed: {0}")]
    Service(String),

    #[error("generation response parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// The external rewrite service. Carried by the session as
/// `Arc<dyn GenerationService>` so backends can be swapped without
/// touching the editing flow.
#[async_trait]
pub trait GenerationService: Send + Sync {
    async fn generate(&self, document: &Resume, instruction: &str)
        -> Result<Resume, GenerateError>;
}
