//! siraj-rs
//!
//! Workspace umbrella crate: re-exports [`siraj_core`] so the demos can be
//! run from the repository root with `cargo run --example <name>`.

pub use siraj_core::*;
