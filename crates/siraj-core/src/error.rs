// crates/siraj-core/src/error.rs

use thiserror::Error;

/// Result type alias for catalog, configuration and voice-boundary operations.
pub type Result<T> = std::result::Result<T, SirajError>;

/// Errors raised while preparing the assistant.
///
/// Everything except [`SirajError::Voice`] happens before the first query is
/// served and is fatal: without a catalog there is nothing to answer from.
#[derive(Debug, Error)]
pub enum SirajError {
    /// Catalog source could not be located or opened.
    #[error("catalog not found: {0}")]
    NotFound(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Tabular data is malformed.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// Catalog format this build cannot read (e.g. gzip without `compact`).
    #[error("unsupported catalog format: {0}")]
    Unsupported(String),

    /// A required column is missing from the header row.
    #[error("missing column in catalog header: {0}")]
    MissingColumn(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("toml error: {0}")]
    Toml(#[from] toml::de::Error),

    /// A transcription or synthesis adapter failed.
    #[error("voice error: {0}")]
    Voice(String),
}

impl SirajError {
    /// True for the load-time failures that must stop the process.
    pub fn is_data_load(&self) -> bool {
        matches!(
            self,
            SirajError::NotFound(_)
                | SirajError::Io(_)
                | SirajError::Csv(_)
                | SirajError::MissingColumn(_)
                | SirajError::Unsupported(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_failures_are_data_load_errors() {
        assert!(SirajError::NotFound("x".into()).is_data_load());
        assert!(SirajError::MissingColumn("Path".into()).is_data_load());
        assert!(SirajError::Unsupported("x.csv.gz".into()).is_data_load());
        assert!(!SirajError::Config("x".into()).is_data_load());
        assert!(!SirajError::Voice("x".into()).is_data_load());
    }
}
