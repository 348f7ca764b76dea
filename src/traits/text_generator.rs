use async_trait::async_trait;

use crate::errors::CaseGenResult;

/// A text-generation backend
///
/// Implementations return the full generated text or a `BackendError` carrying a
/// human-readable message. Partial or streamed output is never surfaced.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate a completion for `prompt` with the named model
    async fn generate(&self, prompt: &str, model: &str) -> CaseGenResult<String>;
}
