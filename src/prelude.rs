//! Prelude module for datetime_flow crate.
//!
//! Re-exports the derive macros the error and enum types use.

pub use derive_more::Display;
