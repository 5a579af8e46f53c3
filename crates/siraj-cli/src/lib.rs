//! siraj-cli
//! =========
//!
//! Command-line interface for the `siraj-core` destination resolver.
//!
//! This crate primarily provides a binary (`siraj`). The library target only
//! exists so that docs.rs renders this overview.
//!
//! Quick start
//! -----------
//!
//! ```text
//! siraj --catalog restaurants.csv stats
//! siraj ask "خذني إلى مطعم الديوان"
//! siraj resolve "الديوان" --top 3
//! siraj listen < transcripts.txt
//! ```
//!
//! For programmatic access use the [`siraj-core`] crate directly.
#![cfg_attr(docsrs, feature(doc_cfg))]
