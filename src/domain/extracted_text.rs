use super::document::DocumentFormat;

pub const MIN_MEANINGFUL_CHARS: usize = 10;
pub const TRUNCATION_MARKER: &str = "\n\n[Text truncated for processing]";

/// Plain text pulled out of a document.
///
/// `is_placeholder` is set when the extractor found nothing and substituted a
/// fixed explanatory sentence, so callers can tell that apart from real content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedText {
    pub text: String,
    pub source_format: DocumentFormat,
    pub is_placeholder: bool,
}

impl ExtractedText {
    pub fn new(text: String, source_format: DocumentFormat) -> Self {
        Self {
            text,
            source_format,
            is_placeholder: false,
        }
    }

    pub fn placeholder(text: &str, source_format: DocumentFormat) -> Self {
        Self {
            text: text.to_string(),
            source_format,
            is_placeholder: true,
        }
    }

    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_meaningful(&self) -> bool {
        self.text.trim().chars().count() >= MIN_MEANINGFUL_CHARS
    }

    /// Clips the text to `max_chars` and appends [`TRUNCATION_MARKER`].
    /// Returns whether anything was cut.
    pub fn truncate_for_processing(&mut self, max_chars: usize) -> bool {
        let clipped = clip_chars(&self.text, max_chars);
        if clipped.len() == self.text.len() {
            return false;
        }

        let mut truncated = String::with_capacity(clipped.len() + TRUNCATION_MARKER.len());
        truncated.push_str(clipped);
        truncated.push_str(TRUNCATION_MARKER);
        self.text = truncated;
        true
    }
}

/// Returns the longest prefix of `text` holding at most `max_chars` characters.
pub fn clip_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => &text[..byte_index],
        None => text,
    }
}
