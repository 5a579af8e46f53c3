// crates/siraj-core/src/fuzzy.rs

//! # Approximate string matching
//!
//! Similarity scores in `0..=100` built on `strsim`'s normalized Levenshtein
//! distance, which counts chars so Arabic text is measured per letter rather
//! than per byte.
//!
//! The public scorers fold their inputs with [`fold_key`] first; the
//! `*_folded` helpers assume that has already happened.

use crate::text::fold_key;

/// Applied to the token-based scores so an exact character match still wins.
const UNBASE_SCALE: f64 = 0.95;
/// Applied to `partial_ratio` when the lengths differ substantially.
const PARTIAL_SCALE: f64 = 0.90;
/// Applied instead of [`PARTIAL_SCALE`] when one side is tiny compared to the other.
const LONG_PARTIAL_SCALE: f64 = 0.60;

/// Length ratio from which substring alignment is considered.
const PARTIAL_FROM_LEN_RATIO: f64 = 1.5;
const LONG_LEN_RATIO: f64 = 8.0;

/// Plain similarity of two whole strings.
pub fn ratio(a: &str, b: &str) -> u8 {
    ratio_folded(&fold_key(a), &fold_key(b))
}

/// Best similarity between the shorter string and any equally long window
/// of the longer one.
pub fn partial_ratio(a: &str, b: &str) -> u8 {
    partial_ratio_folded(&fold_key(a), &fold_key(b))
}

/// Similarity after sorting the words of both strings.
pub fn token_sort_ratio(a: &str, b: &str) -> u8 {
    token_sort_folded(&fold_key(a), &fold_key(b))
}

/// Similarity that ignores word order and duplicated words, and rewards one
/// side's words being a subset of the other's.
pub fn token_set_ratio(a: &str, b: &str) -> u8 {
    token_set_folded(&fold_key(a), &fold_key(b))
}

/// The score used to resolve spoken destinations.
///
/// Takes the maximum of:
/// - [`ratio`]
/// - [`token_sort_ratio`] and [`token_set_ratio`], scaled by 0.95
/// - [`partial_ratio`] scaled by 0.9 (0.6 beyond an 8x length ratio), only
///   when the longer string is at least 1.5x the shorter
///
/// Returns 0 when either side folds to an empty string and 100 for two
/// identical non-empty strings.
///
/// # Examples
/// ```rust
/// use siraj_core::fuzzy::weighted_ratio;
///
/// assert_eq!(weighted_ratio("مطعم الديوان", "مطعم الديوان"), 100);
/// assert!(weighted_ratio("الديوان", "مطعم الديوان") >= 90);
/// assert_eq!(weighted_ratio("", "مطعم الديوان"), 0);
/// ```
pub fn weighted_ratio(a: &str, b: &str) -> u8 {
    weighted_ratio_folded(&fold_key(a), &fold_key(b))
}

pub(crate) fn weighted_ratio_folded(a: &str, b: &str) -> u8 {
    let (len_a, len_b) = (a.chars().count(), b.chars().count());
    if len_a == 0 || len_b == 0 {
        return 0;
    }

    let base = f64::from(ratio_folded(a, b));
    let sorted = f64::from(token_sort_folded(a, b)) * UNBASE_SCALE;
    let set = f64::from(token_set_folded(a, b)) * UNBASE_SCALE;
    let mut best = base.max(sorted).max(set);

    let len_ratio = len_a.max(len_b) as f64 / len_a.min(len_b) as f64;
    if len_ratio >= PARTIAL_FROM_LEN_RATIO {
        let scale = if len_ratio > LONG_LEN_RATIO {
            LONG_PARTIAL_SCALE
        } else {
            PARTIAL_SCALE
        };
        best = best.max(f64::from(partial_ratio_folded(a, b)) * scale);
    }

    best.round().min(100.0) as u8
}

fn ratio_folded(a: &str, b: &str) -> u8 {
    match (a.is_empty(), b.is_empty()) {
        (true, true) => 100,
        (true, false) | (false, true) => 0,
        (false, false) => (strsim::normalized_levenshtein(a, b) * 100.0).round() as u8,
    }
}

fn partial_ratio_folded(a: &str, b: &str) -> u8 {
    if a.is_empty() || b.is_empty() {
        return 0;
    }
    let (short, long) = if a.chars().count() <= b.chars().count() {
        (a, b)
    } else {
        (b, a)
    };
    let long: Vec<char> = long.chars().collect();

    let mut best = 0;
    for window in long.windows(short.chars().count()) {
        let window: String = window.iter().collect();
        best = best.max(ratio_folded(short, &window));
        if best == 100 {
            break;
        }
    }
    best
}

fn token_sort_folded(a: &str, b: &str) -> u8 {
    ratio_folded(&sorted_tokens(a), &sorted_tokens(b))
}

fn token_set_folded(a: &str, b: &str) -> u8 {
    let mut left: Vec<&str> = a.split(' ').filter(|t| !t.is_empty()).collect();
    let mut right: Vec<&str> = b.split(' ').filter(|t| !t.is_empty()).collect();
    left.sort_unstable();
    left.dedup();
    right.sort_unstable();
    right.dedup();

    let intersection: Vec<&str> = left.iter().copied().filter(|t| right.contains(t)).collect();
    let only_left: Vec<&str> = left.iter().copied().filter(|t| !right.contains(t)).collect();
    let only_right: Vec<&str> = right.iter().copied().filter(|t| !left.contains(t)).collect();

    let sect = intersection.join(" ");
    let combined_left = join_nonempty(&sect, &only_left.join(" "));
    let combined_right = join_nonempty(&sect, &only_right.join(" "));

    let mut best = ratio_folded(&combined_left, &combined_right);
    if !sect.is_empty() {
        best = best
            .max(ratio_folded(&sect, &combined_left))
            .max(ratio_folded(&sect, &combined_right));
    }
    best
}

fn sorted_tokens(s: &str) -> String {
    let mut tokens: Vec<&str> = s.split(' ').filter(|t| !t.is_empty()).collect();
    tokens.sort_unstable();
    tokens.join(" ")
}

fn join_nonempty(head: &str, tail: &str) -> String {
    match (head.is_empty(), tail.is_empty()) {
        (true, _) => tail.to_owned(),
        (false, true) => head.to_owned(),
        (false, false) => format!("{head} {tail}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_strings_score_full() {
        assert_eq!(ratio("مطعم الديوان", "مطعم الديوان"), 100);
        assert_eq!(weighted_ratio("Al Baik", "al baik"), 100);
    }

    #[test]
    fn empty_input_scores_zero() {
        assert_eq!(weighted_ratio("", "مطعم"), 0);
        assert_eq!(weighted_ratio("مطعم", "   "), 0);
        assert_eq!(weighted_ratio("?!", "?!"), 0);
    }

    #[test]
    fn ratio_is_normalized_edit_distance() {
        // "kitten"/"sitting": 3 edits over 7 chars
        assert_eq!(ratio("kitten", "sitting"), 57);
        assert_eq!(ratio("abc", "xyz"), 0);
    }

    #[test]
    fn partial_ratio_finds_embedded_name() {
        assert_eq!(partial_ratio("الديوان", "مطعم الديوان"), 100);
        assert_eq!(partial_ratio("مطعم الديوان", "الديوان"), 100);
    }

    #[test]
    fn token_ratios_ignore_word_order() {
        assert_eq!(token_sort_ratio("الديوان مطعم", "مطعم الديوان"), 100);
        assert_eq!(token_set_ratio("مطعم مطعم الديوان", "الديوان مطعم"), 100);
        assert_eq!(token_set_ratio("الديوان", "مطعم الديوان"), 100);
    }

    #[test]
    fn one_shared_word_is_not_enough() {
        assert!(weighted_ratio("أريد مطعم غير موجود", "مطعم الديوان") < 60);
    }

    #[test]
    fn transcription_slips_still_match() {
        assert!(weighted_ratio("مطعم الديون", "مطعم الديوان") >= 90);
        assert!(weighted_ratio("ديوان", "مطعم الديوان") >= 60);
    }
}
