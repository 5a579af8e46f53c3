// crates/siraj-core/src/prelude.rs
pub use crate::assistant::{Assistant, Messages, QueryError, ResolutionResult, DEFAULT_THRESHOLD};
pub use crate::catalog::{Catalog, CatalogEntry, CatalogStats};
pub use crate::config::Settings;
pub use crate::error::{Result, SirajError};
pub use crate::extract::NameExtractor;
pub use crate::loader::ColumnSpec;
pub use crate::resolve::{resolve, resolve_top, Resolution};
pub use crate::session::{Session, SessionState};
pub use crate::voice::{Synthesizer, TextSynthesizer, TextTranscriber, Transcriber};
