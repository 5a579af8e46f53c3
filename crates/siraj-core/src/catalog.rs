// crates/siraj-core/src/catalog.rs

//! # Catalog
//!
//! The immutable table of known places. Built once at start-up (see
//! [`crate::loader`]) and then shared by reference with every query.

use serde::{Deserialize, Serialize};

use crate::fuzzy::weighted_ratio_folded;
use crate::text::fold_key;

/// A place and the directions to reach it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Primary matching key. Empty when the source row carried no name at all.
    pub display_name: String,
    /// Free-text directions; may be empty.
    pub route: String,
}

impl CatalogEntry {
    pub fn new(display_name: impl Into<String>, route: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            route: route.into(),
        }
    }

    /// Applies the naming policy: primary name if non-empty, else the
    /// fallback, else an empty key.
    pub fn from_names(primary: Option<&str>, fallback: Option<&str>, route: &str) -> Self {
        fn pick(s: Option<&str>) -> Option<&str> {
            s.map(str::trim).filter(|s| !s.is_empty())
        }
        let display_name = pick(primary).or_else(|| pick(fallback)).unwrap_or_default();
        Self::new(display_name, route.trim())
    }

    pub fn is_named(&self) -> bool {
        !self.display_name.is_empty()
    }

    pub fn has_route(&self) -> bool {
        !self.route.is_empty()
    }
}

/// Simple aggregate counts for a loaded catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogStats {
    pub entries: usize,
    pub with_route: usize,
    /// Rows without any name; kept but never matched.
    pub unnamed: usize,
}

/// Ordered, read-only collection of [`CatalogEntry`] values.
///
/// Entry order is the source order and decides ties during resolution.
/// There is no mutating API: share it as `&Catalog` (or inside an `Arc`).
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
    // Folded display names, parallel to `entries`.
    keys: Vec<String>,
}

impl Catalog {
    pub fn from_entries(entries: Vec<CatalogEntry>) -> Self {
        let keys = entries.iter().map(|e| fold_key(&e.display_name)).collect();
        Self { entries, keys }
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn stats(&self) -> CatalogStats {
        CatalogStats {
            entries: self.entries.len(),
            with_route: self.entries.iter().filter(|e| e.has_route()).count(),
            unnamed: self.entries.iter().filter(|e| !e.is_named()).count(),
        }
    }

    /// Exact route lookup.
    ///
    /// Returns the route of the first entry whose display name equals `name`
    /// byte for byte, or `""` when there is none. Unnamed rows never match. No folding or fuzziness is
    /// applied: this runs after resolution already chose a concrete name.
    ///
    /// # Example
    ///
    /// ```
    /// use siraj_core::{Catalog, CatalogEntry};
    ///
    /// let catalog = Catalog::from_entries(vec![
    ///     CatalogEntry::new("مطعم الديوان", "يسار ثم يمين"),
    /// ]);
    /// assert_eq!(catalog.lookup("مطعم الديوان"), "يسار ثم يمين");
    /// assert_eq!(catalog.lookup("مطعم"), "");
    /// ```
    pub fn lookup(&self, display_name: &str) -> &str {
        self.entries
            .iter()
            .find(|e| e.is_named() && e.display_name == display_name)
            .map(|e| e.route.as_str())
            .unwrap_or("")
    }

    /// Route for a name handed over by an external dialog manager.
    ///
    /// Tries [`Catalog::lookup`] first; if the name is unknown, falls back to
    /// the best fuzzy match and accepts it only at `threshold` or above.
    pub fn route_for(&self, name: &str, threshold: u8) -> &str {
        let exact = self.lookup(name);
        if !exact.is_empty() {
            return exact;
        }
        match self.best_match(name) {
            Some((entry, score)) if score >= threshold => entry.route.as_str(),
            _ => "",
        }
    }

    /// Named entries scored against `query`, in catalog order.
    ///
    /// An entry whose display name equals `query` byte for byte scores 100
    /// even when its folded key is empty (symbols, emoji).
    pub(crate) fn scored<'a, 'q>(
        &'a self,
        query: &'q str,
        folded_query: &'q str,
    ) -> impl Iterator<Item = (&'a CatalogEntry, u8)> + 'q
    where
        'a: 'q,
    {
        self.entries
            .iter()
            .zip(&self.keys)
            .filter(|(entry, _)| entry.is_named())
            .map(move |(entry, key)| {
                let score = if entry.display_name == query {
                    100
                } else {
                    weighted_ratio_folded(folded_query, key)
                };
                (entry, score)
            })
    }

    /// Highest-scoring named entry for `query`.
    ///
    /// A byte-exact display name wins outright, ahead of earlier entries that
    /// only fold to the same key. Otherwise the earliest entry wins a tie.
    pub(crate) fn best_match(&self, query: &str) -> Option<(&CatalogEntry, u8)> {
        if let Some(exact) = self
            .entries
            .iter()
            .find(|e| e.is_named() && e.display_name == query)
        {
            return Some((exact, 100));
        }

        let folded = fold_key(query);
        let mut best: Option<(&CatalogEntry, u8)> = None;
        for (entry, score) in self.scored(query, &folded) {
            if best.map_or(true, |(_, top)| score > top) {
                best = Some((entry, score));
                if score == 100 {
                    break;
                }
            }
        }
        best
    }
}

impl FromIterator<CatalogEntry> for Catalog {
    fn from_iter<I: IntoIterator<Item = CatalogEntry>>(iter: I) -> Self {
        Self::from_entries(iter.into_iter().collect())
    }
}
