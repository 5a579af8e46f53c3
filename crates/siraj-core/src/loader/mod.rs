// crates/siraj-core/src/loader/mod.rs

//! # Catalog Loader
//!
//! Handles the physical layer (file access, optional gzip) and maps CSV rows
//! onto [`CatalogEntry`] values using a [`ColumnSpec`].

use crate::catalog::{Catalog, CatalogEntry};
use crate::error::{Result, SirajError};
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::{Path, PathBuf};

pub mod common_io;

/// Default catalog file, resolved against the working directory.
pub const DEFAULT_CATALOG_FILENAME: &str = "restaurants.csv";

/// Header names used to build catalog entries.
///
/// Column names are configuration: any CSV with a primary-name column and
/// a route column can back the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnSpec {
    /// Native-language name (required header).
    pub primary: String,
    /// Localized fallback name; the header may be absent.
    pub fallback: Option<String>,
    /// Directions text (required header).
    pub route: String,
}

impl Default for ColumnSpec {
    fn default() -> Self {
        Self {
            primary: "Name".to_owned(),
            fallback: Some("English_name".to_owned()),
            route: "Path".to_owned(),
        }
    }
}

impl Catalog {
    pub fn default_catalog_path() -> PathBuf {
        PathBuf::from(DEFAULT_CATALOG_FILENAME)
    }

    /// Reads the catalog from a CSV file (or `.csv.gz` with the `compact`
    /// feature).
    ///
    /// # Errors
    ///
    /// Any failure here is a data-load error: a missing file, malformed CSV,
    /// or a header without the primary or route column.
    pub fn load_from_path(path: impl AsRef<Path>, columns: &ColumnSpec) -> Result<Self> {
        let path = path.as_ref();
        let reader = common_io::open_stream(path)?;
        let catalog = Self::from_reader(reader, columns)?;

        let stats = catalog.stats();
        tracing::debug!(
            path = %path.display(),
            entries = stats.entries,
            with_route = stats.with_route,
            unnamed = stats.unnamed,
            "catalog loaded"
        );
        Ok(catalog)
    }

    /// Parses CSV data with a header row.
    pub fn from_reader<R: Read>(reader: R, columns: &ColumnSpec) -> Result<Self> {
        let mut csv = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = csv.headers()?.clone();
        // A UTF-8 BOM sticks to the first header when the file came from a spreadsheet.
        let position = |name: &str| {
            headers
                .iter()
                .position(|h| h.trim_start_matches('\u{feff}') == name)
        };

        let primary = position(&columns.primary)
            .ok_or_else(|| SirajError::MissingColumn(columns.primary.clone()))?;
        let route = position(&columns.route)
            .ok_or_else(|| SirajError::MissingColumn(columns.route.clone()))?;
        let fallback = columns.fallback.as_deref().and_then(|name| position(name));
        if let (Some(name), None) = (&columns.fallback, fallback) {
            tracing::debug!(column = %name, "fallback name column absent, using primary only");
        }

        let mut entries = Vec::new();
        for record in csv.records() {
            let record = record?;
            let entry = CatalogEntry::from_names(
                record.get(primary),
                fallback.and_then(|i| record.get(i)),
                record.get(route).unwrap_or(""),
            );
            if !entry.is_named() {
                tracing::warn!(
                    line = record.position().map(|p| p.line()),
                    "catalog row has no name; it will never be matched"
                );
            }
            entries.push(entry);
        }

        Ok(Catalog::from_entries(entries))
    }
}
