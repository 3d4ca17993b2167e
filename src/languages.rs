//! Static dictionary of languages supported by the translation backend.
//!
//! Names are stored the way the backend reports them (lowercase English);
//! display labels are derived with [`format_language_name`].

use serde::Serialize;

/// Sentinel code for "detect the source language automatically".
pub const AUTO: &str = "auto";
pub const AUTO_LABEL: &str = "Detect automatically";

pub const DEFAULT_SOURCE: &str = AUTO;
pub const DEFAULT_TARGET: &str = "en";

/// (backend name, ISO 639-1 code) pairs.
pub const SUPPORTED_LANGUAGES: &[(&str, &str)] = &[
    ("afrikaans", "af"),
    ("albanian", "sq"),
    ("amharic", "am"),
    ("arabic", "ar"),
    ("armenian", "hy"),
    ("azerbaijani", "az"),
    ("basque", "eu"),
    ("belarusian", "be"),
    ("bengali", "bn"),
    ("bosnian", "bs"),
    ("bulgarian", "bg"),
    ("catalan", "ca"),
    ("chinese (simplified)", "zh-CN"),
    ("chinese (traditional)", "zh-TW"),
    ("croatian", "hr"),
    ("czech", "cs"),
    ("danish", "da"),
    ("dutch", "nl"),
    ("english", "en"),
    ("esperanto", "eo"),
    ("estonian", "et"),
    ("filipino", "tl"),
    ("finnish", "fi"),
    ("french", "fr"),
    ("galician", "gl"),
    ("georgian", "ka"),
    ("german", "de"),
    ("greek", "el"),
    ("gujarati", "gu"),
    ("hebrew", "iw"),
    ("hindi", "hi"),
    ("hungarian", "hu"),
    ("icelandic", "is"),
    ("indonesian", "id"),
    ("irish", "ga"),
    ("italian", "it"),
    ("japanese", "ja"),
    ("kannada", "kn"),
    ("kazakh", "kk"),
    ("khmer", "km"),
    ("korean", "ko"),
    ("lao", "lo"),
    ("latin", "la"),
    ("latvian", "lv"),
    ("lithuanian", "lt"),
    ("macedonian", "mk"),
    ("malay", "ms"),
    ("malayalam", "ml"),
    ("maltese", "mt"),
    ("marathi", "mr"),
    ("mongolian", "mn"),
    ("nepali", "ne"),
    ("norwegian", "no"),
    ("persian", "fa"),
    ("polish", "pl"),
    ("portuguese", "pt"),
    ("punjabi", "pa"),
    ("romanian", "ro"),
    ("russian", "ru"),
    ("serbian", "sr"),
    ("sinhala", "si"),
    ("slovak", "sk"),
    ("slovenian", "sl"),
    ("spanish", "es"),
    ("swahili", "sw"),
    ("swedish", "sv"),
    ("tamil", "ta"),
    ("telugu", "te"),
    ("thai", "th"),
    ("turkish", "tr"),
    ("ukrainian", "uk"),
    ("urdu", "ur"),
    ("uzbek", "uz"),
    ("vietnamese", "vi"),
    ("welsh", "cy"),
    ("yiddish", "yi"),
    ("zulu", "zu"),
];

/// One selector entry as sent to the form page.
#[derive(Debug, Clone, Serialize)]
pub struct LanguageOption {
    pub label: String,
    pub code: String,
}

/// Title Case display label from a backend language name.
pub fn format_language_name(raw_name: &str) -> String {
    raw_name
        .split(['_', ' '])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Build the selector option lists, both sorted alphabetically by label.
///
/// The source list is prefixed with the auto-detect entry; the target list
/// never contains it.
pub fn language_options() -> (Vec<LanguageOption>, Vec<LanguageOption>) {
    let mut target_options: Vec<LanguageOption> = SUPPORTED_LANGUAGES
        .iter()
        .map(|(name, code)| LanguageOption {
            label: format_language_name(name),
            code: (*code).to_string(),
        })
        .collect();
    target_options.sort_by(|a, b| a.label.cmp(&b.label));

    let mut source_options = Vec::with_capacity(target_options.len() + 1);
    source_options.push(LanguageOption {
        label: AUTO_LABEL.to_string(),
        code: AUTO.to_string(),
    });
    source_options.extend(target_options.iter().cloned());

    (source_options, target_options)
}

/// Whether `code` appears in the dictionary. The sentinel `"auto"` is not a
/// language and returns false here.
pub fn is_supported(code: &str) -> bool {
    SUPPORTED_LANGUAGES.iter().any(|(_, c)| *c == code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_name_title_cases_words() {
        assert_eq!(format_language_name("english"), "English");
        assert_eq!(format_language_name("haitian_creole"), "Haitian Creole");
        assert_eq!(format_language_name("chinese (simplified)"), "Chinese (simplified)");
    }

    #[test]
    fn source_options_start_with_auto_detect() {
        let (source, _) = language_options();
        assert_eq!(source[0].code, AUTO);
        assert_eq!(source[0].label, AUTO_LABEL);
    }

    #[test]
    fn target_options_never_contain_auto() {
        let (_, target) = language_options();
        assert!(target.iter().all(|opt| opt.code != AUTO));
    }

    #[test]
    fn options_are_sorted_by_label() {
        let (source, target) = language_options();
        // Skip the pinned auto entry in the source list.
        assert!(source[1..].windows(2).all(|w| w[0].label <= w[1].label));
        assert!(target.windows(2).all(|w| w[0].label <= w[1].label));
    }

    #[test]
    fn supported_lookup() {
        assert!(is_supported("en"));
        assert!(is_supported("zh-CN"));
        assert!(!is_supported("auto"));
        assert!(!is_supported("xx"));
    }

    #[test]
    fn default_target_is_supported() {
        assert!(is_supported(DEFAULT_TARGET));
    }
}
