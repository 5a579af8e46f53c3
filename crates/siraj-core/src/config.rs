// crates/siraj-core/src/config.rs

//! Runtime settings, read from an optional TOML file.
//!
//! ```toml
//! catalog_path = "data/restaurants.csv.gz"
//! threshold = 65
//! wake_word = "سراج"
//!
//! [columns]
//! primary = "Name"
//! fallback = "English_name"
//! route = "Path"
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::assistant::{Messages, DEFAULT_THRESHOLD};
use crate::error::{Result, SirajError};
use crate::extract::DEFAULT_MARKERS;
use crate::loader::{ColumnSpec, DEFAULT_CATALOG_FILENAME};

/// Word that wakes the assistant up.
pub const DEFAULT_WAKE_WORD: &str = "سراج";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub catalog_path: PathBuf,
    /// Minimum fuzzy score, `0..=100`.
    pub threshold: u8,
    pub wake_word: String,
    pub columns: ColumnSpec,
    pub markers: Vec<String>,
    pub messages: Messages,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from(DEFAULT_CATALOG_FILENAME),
            threshold: DEFAULT_THRESHOLD,
            wake_word: DEFAULT_WAKE_WORD.to_owned(),
            columns: ColumnSpec::default(),
            markers: DEFAULT_MARKERS.iter().map(|m| (*m).to_owned()).collect(),
            messages: Messages::default(),
        }
    }
}

impl Settings {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let settings: Settings = toml::from_str(s)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reads `path` if given, otherwise returns the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = std::fs::read_to_string(path).map_err(|e| {
            SirajError::Config(format!("cannot read settings {}: {}", path.display(), e))
        })?;
        let settings = Self::from_toml_str(&text)?;
        tracing::debug!(path = %path.display(), "settings loaded");
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        if self.threshold > 100 {
            return Err(SirajError::Config(format!(
                "threshold must be within 0..=100, got {}",
                self.threshold
            )));
        }
        if self.wake_word.trim().is_empty() {
            return Err(SirajError::Config("wake_word must not be empty".into()));
        }
        if self.markers.is_empty() || self.markers.iter().any(|m| m.trim().is_empty()) {
            return Err(SirajError::Config(
                "markers must be a non-empty list of non-empty strings".into(),
            ));
        }
        if self.columns.primary.trim().is_empty() || self.columns.route.trim().is_empty() {
            return Err(SirajError::Config(
                "primary and route column names must not be empty".into(),
            ));
        }
        Ok(())
    }
}
