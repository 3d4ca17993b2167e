/// Translator interface - actual translation happens in a remote service

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single form submission. Nothing outlives the request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslateRequest {
    pub text: String,
    pub source_lang: String,
    pub target_lang: String,
}

#[derive(Debug, Error)]
pub enum TranslateError {
    #[error("target language cannot be \"auto\", select a specific language")]
    InvalidTargetLanguage,

    #[error("unsupported language code: {0}")]
    UnsupportedLanguage(String),

    #[error("translation service error: {0}")]
    Service(String),
}

/// Translation backend trait - the real implementation talks to an online
/// service over HTTP, tests substitute an in-memory fake
#[async_trait]
pub trait TranslatorInterface: Send + Sync {
    /// Translate `text` from `source_lang` into `target_lang`.
    ///
    /// `source_lang` may be the sentinel `"auto"` for server-side detection;
    /// `target_lang` is always a concrete language code by the time this is
    /// called.
    async fn translate(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> Result<String, TranslateError>;
}
