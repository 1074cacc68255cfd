//! cef-core
//!
//! Common Event Format (CEF) codec.
//! Pure Rust, no I/O on the hot path, no global state.
//!
//! ```
//! use cef_core::{decode_event, CefEvent, HeaderField};
//!
//! let mut event = CefEvent::from_parts(
//!     [("deviceVendor", "Acme|Corp"), ("sigid", "4001")],
//!     [("src", "10.0.0.1"), ("msg", "blocked a=b")],
//! );
//! event.update_header([("severity", "7")]);
//!
//! let wire = event.to_cef_string();
//! assert_eq!(wire, r"CEF:0|Acme\|Corp|test|1.0|4001|test event|7|src=10.0.0.1 msg=blocked a\=b");
//!
//! let back = decode_event(&wire).unwrap();
//! assert_eq!(back, event);
//! assert_eq!(back.header_value(HeaderField::DeviceVendor), "Acme|Corp");
//! ```

#![forbid(unsafe_code)]

// Shared and top level
pub mod constants;
pub mod config;

// Leaf-first
pub mod escape;
pub mod event;
pub mod codec;

pub use codec::{
    decode_event, decode_event_with, encode_event, encode_event_with, split_record,
    tokenize_extension, DecodeError, RecordParts,
};
pub use config::{CodecConfig, ConfigError, ExtensionOrder, VersionPolicy};
pub use escape::{escape, unescape, Structural};
pub use event::{CefEvent, Extension, FieldLookup, Header, HeaderField, HEADER_ALIASES};

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::codec::{decode_event, encode_event, DecodeError};
    pub use crate::config::CodecConfig;
    pub use crate::event::{CefEvent, HeaderField};
}
