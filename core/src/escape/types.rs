// ## 📂 File: `src/escape/types.rs`

//! escape/types.rs
//! Structural character classes for escaping.

use std::fmt;

use crate::constants::structural;

/// Character that delimits fields in the part of the record being escaped.
/// - `Pipe`: header fields.
/// - `Equals`: extension key/value boundary.
///
/// The backslash is escaped in both classes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Structural {
    Pipe,
    Equals,
}

impl Structural {
    #[inline]
    pub const fn as_char(self) -> char {
        match self {
            Structural::Pipe   => structural::PIPE,
            Structural::Equals => structural::EQUALS,
        }
    }
}

impl fmt::Display for Structural {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.as_char())
    }
}
