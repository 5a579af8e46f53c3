// crates/siraj-core/src/resolve.rs

//! # Fuzzy Resolver
//!
//! Scores a candidate name against every named catalog entry with
//! [`weighted_ratio`](crate::fuzzy::weighted_ratio) and reports the best one.
//! The resolver never applies a threshold; callers decide what score is
//! good enough.

use serde::Serialize;
use std::cmp::Reverse;

use crate::catalog::Catalog;
use crate::text::fold_key;

/// Best candidate for a query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub query: String,
    /// `None` only when the catalog has no named entry.
    pub matched_name: Option<String>,
    /// Confidence in `0..=100`.
    pub score: u8,
}

impl Resolution {
    pub fn is_accepted(&self, threshold: u8) -> bool {
        self.matched_name.is_some() && self.score >= threshold
    }
}

/// One scored catalog name, as returned by [`resolve_top`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Candidate {
    pub name: String,
    pub score: u8,
}

/// Finds the best-matching display name for `query`.
///
/// A query equal to a display name byte for byte always returns that entry
/// with score 100. Other ties go to the entry that comes first in the
/// catalog. An empty catalog
/// (or one whose rows are all unnamed) yields no match and a score of 0.
///
/// # Example
///
/// ```
/// use siraj_core::{resolve, Catalog, CatalogEntry};
///
/// let catalog = Catalog::from_entries(vec![CatalogEntry::new("مطعم الديوان", "يسار ثم يمين")]);
/// let hit = resolve("مطعم الديوان", &catalog);
/// assert_eq!(hit.matched_name.as_deref(), Some("مطعم الديوان"));
/// assert_eq!(hit.score, 100);
/// ```
pub fn resolve(query: &str, catalog: &Catalog) -> Resolution {
    let best = catalog.best_match(query);

    Resolution {
        query: query.to_owned(),
        matched_name: best.map(|(entry, _)| entry.display_name.clone()),
        score: best.map_or(0, |(_, score)| score),
    }
}

/// The `limit` best candidates, highest score first, catalog order among ties.
pub fn resolve_top(query: &str, catalog: &Catalog, limit: usize) -> Vec<Candidate> {
    let folded = fold_key(query);
    let mut scored: Vec<Candidate> = catalog
        .scored(query, &folded)
        .map(|(entry, score)| Candidate {
            name: entry.display_name.clone(),
            score,
        })
        .collect();
    // Stable sort: byte-exact names lead their score, then catalog order.
    scored.sort_by_key(|c| (Reverse(c.score), c.name != query));
    scored.truncate(limit);
    scored
}
