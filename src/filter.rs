use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;

/// Strips tokens that should never reach the spell engine: configured
/// patterns first (URLs, hashes, ALL_CAPS, ...), then code-like words.
pub struct StopwordFilter {
    patterns: Vec<Regex>,
}

impl StopwordFilter {
    pub fn new(patterns: &[String]) -> Self {
        let mut compiled = Vec::new();
        for pattern in patterns {
            match Regex::new(pattern) {
                Ok(re) => compiled.push(re),
                Err(e) => log::warn!("ignoring invalid stopword pattern '{}': {}", pattern, e),
            }
        }
        Self { patterns: compiled }
    }

    /// Returns `text` with stopwords blanked out, spacing preserved so the
    /// remaining words stay separated.
    pub fn strip(&self, text: &str) -> String {
        let mut cleaned = text.to_string();
        for re in &self.patterns {
            cleaned = re.replace_all(&cleaned, " ").into_owned();
        }

        cleaned
            .split_word_bounds()
            .map(|segment| if keep_segment(segment) { segment } else { " " })
            .collect()
    }
}

/// Word segments survive only when they look like prose: more than one
/// letter, no digits, no identifier glue.
fn keep_segment(segment: &str) -> bool {
    if !segment.chars().any(|c| c.is_alphabetic()) {
        // punctuation and whitespace pass through untouched
        return true;
    }
    if segment.chars().count() <= 1 {
        return false;
    }
    !segment.chars().any(|c| c.is_numeric() || c == '_')
}
