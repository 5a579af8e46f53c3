// crates/siraj-core/src/lib.rs

//! # siraj-core
//!
//! Destination resolution for a spoken restaurant guide: take one
//! transcribed utterance, pull out the place name, fuzzy-match it against a
//! catalog and hand back the stored route, or a polite apology.
//!
//! ```
//! use siraj_core::prelude::*;
//!
//! let catalog = Catalog::from_entries(vec![CatalogEntry::new("مطعم الديوان", "يسار ثم يمين")]);
//! let assistant = Assistant::new(&catalog, NameExtractor::default(), DEFAULT_THRESHOLD);
//!
//! assert_eq!(
//!     assistant.reply("خذني إلى مطعم الديوان"),
//!     "أقرب مسار لمطعم مطعم الديوان هو: يسار ثم يمين"
//! );
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod assistant;
pub mod catalog;
pub mod config;
pub mod error;
pub mod extract;
pub mod fuzzy;
pub mod loader; // The public loader
pub mod prelude;
pub mod resolve;
pub mod session;
pub mod text;
pub mod voice;

// Re-exports
pub use crate::assistant::{Assistant, Messages, QueryError, ResolutionResult, DEFAULT_THRESHOLD};
pub use crate::catalog::{Catalog, CatalogEntry, CatalogStats};
pub use crate::config::Settings;
pub use crate::error::{Result, SirajError};
pub use crate::extract::{extract, NameExtractor};
pub use crate::loader::ColumnSpec;
pub use crate::resolve::{resolve, resolve_top, Candidate, Resolution};
pub use crate::session::{Session, SessionState};
