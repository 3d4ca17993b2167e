use tracing::debug;

use super::interface::{TranslateError, TranslateRequest, TranslatorInterface};
use crate::languages;

/// Validate a form submission and, when there is real work to do, delegate
/// to the translation backend.
///
/// Checks run in order, first failure wins:
/// 1. the target selector must not be the auto-detect sentinel
/// 2. blank input is a no-op and comes back unchanged
/// 3. identical source/target is a short-circuit, not a translation
/// 4. both codes must exist in the language dictionary
///
/// Stateless, no retries. Backend failures surface as
/// [`TranslateError::Service`]; they never panic.
pub async fn handle(
    request: &TranslateRequest,
    translator: &dyn TranslatorInterface,
) -> Result<String, TranslateError> {
    if request.target_lang == languages::AUTO {
        return Err(TranslateError::InvalidTargetLanguage);
    }

    if request.text.trim().is_empty() {
        debug!("Blank input, skipping backend call");
        return Ok(request.text.clone());
    }

    if request.source_lang == request.target_lang {
        debug!(
            "Source and target are both {}, returning input unchanged",
            request.source_lang
        );
        return Ok(request.text.clone());
    }

    if request.source_lang != languages::AUTO && !languages::is_supported(&request.source_lang) {
        return Err(TranslateError::UnsupportedLanguage(request.source_lang.clone()));
    }
    if !languages::is_supported(&request.target_lang) {
        return Err(TranslateError::UnsupportedLanguage(request.target_lang.clone()));
    }

    // An empty reply for non-empty input is passed through as a success.
    translator
        .translate(&request.text, &request.source_lang, &request.target_lang)
        .await
}
