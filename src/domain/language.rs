use std::collections::BTreeMap;

pub const SOURCE_LANGUAGE: &str = "en";

const LANGUAGES: [(&str, &str); 20] = [
    ("en", "English"),
    ("es", "Spanish"),
    ("fr", "French"),
    ("de", "German"),
    ("hi", "Hindi"),
    ("zh", "Chinese (Simplified)"),
    ("ar", "Arabic"),
    ("pt", "Portuguese"),
    ("ru", "Russian"),
    ("ja", "Japanese"),
    ("it", "Italian"),
    ("ko", "Korean"),
    ("th", "Thai"),
    ("vi", "Vietnamese"),
    ("nl", "Dutch"),
    ("pl", "Polish"),
    ("sv", "Swedish"),
    ("da", "Danish"),
    ("no", "Norwegian"),
    ("fi", "Finnish"),
];

/// Fixed table of the languages offered for translation.
pub struct SupportedLanguages;

impl SupportedLanguages {
    pub fn display_name(code: &str) -> Option<&'static str> {
        LANGUAGES
            .iter()
            .find(|(c, _)| *c == code)
            .map(|(_, name)| *name)
    }

    /// Display name for `code`, or the code itself when it is not in the table.
    pub fn display_name_or_code(code: &str) -> &str {
        Self::display_name(code).unwrap_or(code)
    }

    pub fn is_supported(code: &str) -> bool {
        Self::display_name(code).is_some()
    }

    pub fn as_map() -> BTreeMap<&'static str, &'static str> {
        LANGUAGES.iter().copied().collect()
    }
}
