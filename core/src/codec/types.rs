// ## 📂 File: `src/codec/types.rs`

//! codec/types.rs
//! Decode error taxonomy.
//!
//! - Every variant stops parsing of the record; no partial event is returned.
//! - None of them is fatal to the caller: skip the record or abort, caller's choice.
//! - Encoding has no error type; it is total over `CefEvent`.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// Fewer unescaped pipes than version marker + six pipe-terminated header fields.
    #[error("malformed CEF header: {pipes} of {need} required unescaped pipes")]
    MalformedHeader { pipes: usize, need: usize },

    /// An extension fragment has no trailing key token, or no whitespace
    /// between the previous value and its key.
    #[error("malformed CEF extension: no key/value boundary in fragment {fragment_index} ({fragment:?})")]
    MalformedExtension { fragment_index: usize, fragment: String },

    /// Version marker rejected under `VersionPolicy::Strict`.
    #[error("unsupported CEF version marker {marker:?}, expected CEF:0")]
    UnsupportedVersion { marker: String },
}
