
/// Version marker for the only CEF revision this crate speaks.
/// "CEF:0" = Common Event Format, version 0
pub const CEF_VERSION_MARKER: &str = "CEF:0";

/// Wire prefix written in front of the six header fields.
pub const CEF_HEADER_PREFIX: &str = "CEF:0|";

/// Version marker + six header fields, each pipe-terminated.
/// A record needs at least this many unescaped `|`.
pub const HEADER_SEGMENTS: usize = 7;

/// Number of named header fields (version marker excluded).
pub const HEADER_FIELD_COUNT: usize = 6;

/// Default header values, in wire order.
/// An event created without overrides always encodes to a valid record.
pub const DEFAULT_HEADER: [(&str, &str); HEADER_FIELD_COUNT] = [
    ("deviceVendor",       "test"),
    ("deviceProduct",      "test"),
    ("deviceVersion",      "1.0"),
    ("deviceEventClassId", "100"),
    ("name",               "test event"),
    ("severity",           "0"),
];

/// Structural characters (mirrored in escape::Structural).
pub mod structural {
    pub const PIPE: char      = '|';
    pub const EQUALS: char    = '=';
    pub const BACKSLASH: char = '\\';
    pub const SPACE: char     = ' ';
}

