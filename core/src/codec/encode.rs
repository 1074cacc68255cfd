// ## 📂 File: `src/codec/encode.rs`
//! src/codec/encode.rs
//!
//! CefEvent -> wire string.
//!
//! Design notes:
//! - Header values are already escaped in storage; they are concatenated verbatim.
//! - Extension values are escaped here (`=`, `\`). Keys are written as-is.
//! - Layout: `CEF:0|v|p|ver|id|name|sev|` + `k1=v1 k2=v2` (nothing after the
//!   last `|` when the extension is empty).

use crate::config::{CodecConfig, ExtensionOrder};
use crate::constants::structural::{EQUALS, PIPE, SPACE};
use crate::constants::CEF_HEADER_PREFIX;
use crate::escape::escape_extension_value;
use crate::event::{CefEvent, Extension, Header};

/// `CEF:0|` + six stored header fields, each followed by `|`.
pub fn encode_header(header: &Header) -> String {
    let mut out = String::with_capacity(CEF_HEADER_PREFIX.len() + 64);
    out.push_str(CEF_HEADER_PREFIX);
    for (_, value) in header.iter() {
        out.push_str(value);
        out.push(PIPE);
    }
    out
}

/// Space-joined `key=escaped_value` pairs in the requested order.
pub fn encode_extension(extension: &Extension, order: ExtensionOrder) -> String {
    let mut pairs: Vec<(&str, &str)> = extension.iter().collect();
    if order == ExtensionOrder::Sorted {
        pairs.sort_by(|a, b| a.0.cmp(b.0));
    }

    let mut out = String::new();
    for (i, (key, value)) in pairs.into_iter().enumerate() {
        if i > 0 {
            out.push(SPACE);
        }
        out.push_str(key);
        out.push(EQUALS);
        out.push_str(&escape_extension_value(value));
    }
    out
}

/// Encode with the default configuration (insertion order).
///
/// ```
/// use cef_core::{encode_event, CefEvent};
/// let event = CefEvent::from_parts([("deviceVendor", "Acme")], [("src", "10.0.0.1")]);
/// assert_eq!(encode_event(&event), "CEF:0|Acme|test|1.0|100|test event|0|src=10.0.0.1");
/// ```
pub fn encode_event(event: &CefEvent) -> String {
    encode_event_with(event, &CodecConfig::default())
}

pub fn encode_event_with(event: &CefEvent, config: &CodecConfig) -> String {
    let mut out = encode_header(event.header());
    out.push_str(&encode_extension(event.extension(), config.extension_order));
    out
}
