// ## src/escape/mod.rs

//! escape/mod.rs
//! Character-level escaping for CEF header and extension values.
//!
//! Format notes:
//! - Header values escape `|` and `\` (`\|`, `\\`).
//! - Extension values escape `=` and `\` (`\=`, `\\`).
//! - Escaping assumes an existing `\<structural>` pair was intentional and keeps it.
//!   A value that really holds a backslash followed by the structural character
//!   cannot be told apart from an escaped one; that ambiguity is inherited from the format.

pub mod types;
pub mod encode;
pub mod decode;

pub use types::*;
pub use encode::*;
pub use decode::*;
