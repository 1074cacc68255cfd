// ## 📂 File: `src/event/field.rs`

//! event/field.rs
//! Typed header fields and the alias table used by header mutation.
//!
//! Notes:
//! - Discriminants are the 1-based wire positions (segment 1 = deviceVendor).
//! - Alias matching is ASCII case-insensitive; unknown aliases resolve to
//!   `FieldLookup::Unrecognized` and callers are expected to skip them.

use std::fmt;
use num_enum::{IntoPrimitive, TryFromPrimitive};

use crate::constants::{DEFAULT_HEADER, HEADER_FIELD_COUNT};

/// The six named CEF header fields, in wire order.
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, IntoPrimitive, TryFromPrimitive)]
pub enum HeaderField {
    DeviceVendor       = 1,
    DeviceProduct      = 2,
    DeviceVersion      = 3,
    DeviceEventClassId = 4,
    Name               = 5,
    Severity           = 6,
}

/// Result of resolving a caller-supplied field alias.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FieldLookup {
    Found(HeaderField),
    Unrecognized,
}

impl FieldLookup {
    #[inline]
    pub fn field(self) -> Option<HeaderField> {
        match self {
            FieldLookup::Found(field) => Some(field),
            FieldLookup::Unrecognized => None,
        }
    }
}

/// Named aliases (lowercase). Numeric aliases `"1"`..`"6"` resolve by position.
pub const HEADER_ALIASES: &[(&str, HeaderField)] = &[
    ("devicevendor",       HeaderField::DeviceVendor),
    ("deviceproduct",      HeaderField::DeviceProduct),
    ("deviceversion",      HeaderField::DeviceVersion),
    ("deviceeventclassid", HeaderField::DeviceEventClassId),
    ("sigid",              HeaderField::DeviceEventClassId),
    ("signatureid",        HeaderField::DeviceEventClassId),
    ("name",               HeaderField::Name),
    ("severity",           HeaderField::Severity),
];

impl HeaderField {
    /// All fields in wire order.
    pub const ALL: [HeaderField; HEADER_FIELD_COUNT] = [
        HeaderField::DeviceVendor,
        HeaderField::DeviceProduct,
        HeaderField::DeviceVersion,
        HeaderField::DeviceEventClassId,
        HeaderField::Name,
        HeaderField::Severity,
    ];

    /// 1-based wire position.
    #[inline]
    pub fn index(self) -> u8 {
        u8::from(self)
    }

    /// Field for a 1-based wire position, if any.
    #[inline]
    pub fn from_index(index: u8) -> Option<Self> {
        Self::try_from_primitive(index).ok()
    }

    /// 0-based slot in header storage.
    #[inline]
    pub(crate) const fn slot(self) -> usize {
        self as usize - 1
    }

    /// camelCase name used on the wire docs and in the JSON view.
    #[inline]
    pub const fn canonical_name(self) -> &'static str {
        DEFAULT_HEADER[self.slot()].0
    }

    #[inline]
    pub const fn default_value(self) -> &'static str {
        DEFAULT_HEADER[self.slot()].1
    }

    /// Resolve a caller alias (`"sigId"`, `"4"`, `"deviceEventClassId"`, ...).
    pub fn resolve(alias: &str) -> FieldLookup {
        if let [digit @ b'0'..=b'9'] = alias.as_bytes() {
            return match Self::from_index(digit - b'0') {
                Some(field) => FieldLookup::Found(field),
                None => FieldLookup::Unrecognized,
            };
        }

        HEADER_ALIASES
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(alias))
            .map_or(FieldLookup::Unrecognized, |&(_, field)| FieldLookup::Found(field))
    }
}

impl fmt::Display for HeaderField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.canonical_name())
    }
}
