// ## 📂 File: `src/codec/decode.rs`
//! src/codec/decode.rs
//!
//! Wire string -> CefEvent.
//!
//! Design notes:
//! - Pass 1 splits header from extension on unescaped `|` (`\|` and `\\` are
//!   skipped as units). The version marker and all six header fields must be
//!   pipe-terminated, so a missing pipe never shifts text into `severity`.
//! - Header segments keep their wire (escaped) form, matching the storage invariant.
//! - Pass 2 tokenizes the extension block and unescapes each value.
//! - Any failure aborts the record; nothing partial is returned.

use crate::codec::tokenizer::tokenize_extension;
use crate::codec::types::DecodeError;
use crate::config::CodecConfig;
use crate::constants::{HEADER_FIELD_COUNT, HEADER_SEGMENTS};
use crate::escape::decode::split_unescaped;
use crate::escape::{unescape_extension_value, Structural};
use crate::event::{CefEvent, Extension, Header, HeaderField};

/// A record split into its three raw parts (all still in wire form).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordParts {
    /// Segment 0 (`CEF:0`, possibly behind a syslog prefix).
    pub version: String,
    /// Segments 1..=6, in `HeaderField::ALL` order.
    pub header: [String; HEADER_FIELD_COUNT],
    /// Everything after the 7th unescaped `|` (may be empty).
    pub extension: String,
}

/// Pass 1: split on unescaped pipes.
///
/// # Returns
/// - `Err(DecodeError::MalformedHeader)` if fewer than 7 unescaped pipes are found.
pub fn split_record(raw: &str) -> Result<RecordParts, DecodeError> {
    let segments = split_unescaped(raw, Structural::Pipe, HEADER_SEGMENTS + 1);
    if segments.len() <= HEADER_SEGMENTS {
        return Err(DecodeError::MalformedHeader {
            pipes: segments.len() - 1,
            need: HEADER_SEGMENTS,
        });
    }

    Ok(RecordParts {
        version: segments[0].to_owned(),
        header: std::array::from_fn(|i| segments[i + 1].to_owned()),
        extension: segments[HEADER_SEGMENTS].to_owned(),
    })
}

/// Decode with the default configuration.
///
/// ```
/// use cef_core::{decode_event, HeaderField};
/// let event = decode_event(r"CEF:0|Acme\|Corp|WAF|2.0|100|Block|5|cs1=a\=b").unwrap();
/// assert_eq!(event.header_value(HeaderField::DeviceVendor), "Acme|Corp");
/// assert_eq!(event.extension().get("cs1"), Some("a=b"));
/// ```
pub fn decode_event(raw: &str) -> Result<CefEvent, DecodeError> {
    decode_event_with(raw, &CodecConfig::default())
}

pub fn decode_event_with(raw: &str, config: &CodecConfig) -> Result<CefEvent, DecodeError> {
    decode_inner(raw, config).map_err(|err| {
        tracing::debug!(error = %err, "rejecting CEF record");
        err
    })
}

fn decode_inner(raw: &str, config: &CodecConfig) -> Result<CefEvent, DecodeError> {
    let parts = split_record(raw)?;
    config.version_policy.check(&parts.version)?;

    let mut header = Header::default();
    for (field, value) in HeaderField::ALL.into_iter().zip(parts.header) {
        header.set_escaped(field, value);
    }

    let mut extension = Extension::new();
    for (key, value) in tokenize_extension(&parts.extension)? {
        let value = unescape_extension_value(&value).into_owned();
        extension.insert(key, value);
    }

    Ok(CefEvent::from_decoded(header, extension))
}
