//! event/mod.rs
//! CEF event data model.
//!
//! Notes:
//! - `CefEvent` is created from defaults + overrides, or by decoding a record.
//! - Header mutation goes through `HeaderField` / the alias table, never raw strings.

pub mod field;
pub mod types;

pub use field::*;
pub use types::*;
