// crates/siraj-core/src/extract.rs

//! # Name Extractor
//!
//! Pulls the destination out of a short voice query such as
//! `خذني إلى مطعم الديوان` by looking for a directional preposition and
//! taking the run of Arabic text that follows it.

use crate::error::{Result, SirajError};
use once_cell::sync::Lazy;
use regex::Regex;

/// Prepositions that introduce a destination ("to" / "for").
///
/// Order is priority: each marker is searched for across the whole utterance
/// before the next one is tried. The bare `ل` prefix goes last because it
/// also starts ordinary words such as `لو` in `لو سمحت`.
pub const DEFAULT_MARKERS: [&str; 4] = ["إلى", "الى", "لـ", "ل"];

static DEFAULT_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    build_patterns(&DEFAULT_MARKERS).expect("default destination markers form valid patterns")
});

/// Extracts a candidate place name from an utterance.
#[derive(Debug, Clone)]
pub struct NameExtractor {
    // One pattern per marker, in priority order.
    patterns: Vec<Regex>,
}

impl Default for NameExtractor {
    fn default() -> Self {
        Self {
            patterns: DEFAULT_PATTERNS.clone(),
        }
    }
}

impl NameExtractor {
    /// Builds an extractor for a custom marker list, highest priority first.
    ///
    /// # Errors
    ///
    /// Returns [`SirajError::Config`] if `markers` is empty or contains an
    /// empty marker.
    pub fn new<S: AsRef<str>>(markers: &[S]) -> Result<Self> {
        Ok(Self {
            patterns: build_patterns(markers)?,
        })
    }

    /// Returns the trimmed Arabic run after the highest-priority marker
    /// found, or the whole trimmed utterance when no marker is present.
    ///
    /// A marker only counts at the start of a word, so the `ل` inside
    /// `الديوان` is not mistaken for a preposition.
    ///
    /// # Examples
    ///
    /// ```
    /// use siraj_core::NameExtractor;
    ///
    /// let extractor = NameExtractor::default();
    /// assert_eq!(extractor.extract("خذني إلى مطعم الديوان"), "مطعم الديوان");
    /// assert_eq!(extractor.extract("مطعم الديوان"), "مطعم الديوان");
    /// assert_eq!(extractor.extract("خذني إلى"), "");
    /// assert_eq!(extractor.extract("لو سمحت إلى مطعم الديوان"), "مطعم الديوان");
    /// ```
    pub fn extract<'a>(&self, utterance: &'a str) -> &'a str {
        let name = self
            .patterns
            .iter()
            .find_map(|pattern| pattern.captures(utterance))
            .and_then(|c| c.get(1));
        match name {
            Some(name) => trim_name(name.as_str()),
            None => trim_name(utterance),
        }
    }
}

/// Convenience wrapper around [`NameExtractor::default`].
pub fn extract(utterance: &str) -> &str {
    NameExtractor::default().extract(utterance)
}

fn build_patterns<S: AsRef<str>>(markers: &[S]) -> Result<Vec<Regex>> {
    if markers.is_empty() || markers.iter().any(|m| m.as_ref().trim().is_empty()) {
        return Err(SirajError::Config(
            "destination markers must be a non-empty list of non-empty strings".into(),
        ));
    }
    markers
        .iter()
        .map(|m| {
            let marker = regex::escape(m.as_ref().trim());
            let pattern = format!(r"(?:^|\s){marker}\s*([\x{{0600}}-\x{{06FF}}\s]*)");
            Regex::new(&pattern)
                .map_err(|e| SirajError::Config(format!("invalid marker pattern: {e}")))
        })
        .collect()
}

// Whitespace plus the sentence punctuation a transcriber tends to append.
fn trim_name(s: &str) -> &str {
    s.trim_matches(|c: char| c.is_whitespace() || matches!(c, '؟' | '،' | '؛' | '.' | '?' | '!' | ','))
}
