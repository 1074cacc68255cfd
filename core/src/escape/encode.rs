// ## 📂 File: `src/escape/encode.rs`
//! src/escape/encode.rs
//!
//! Escaping (literal -> CEF-safe).
//!
//! Design notes:
//! - `\<structural>` already present in the input is kept as-is (never double-escaped).
//! - Every other `\` becomes `\\`, every other structural char becomes `\<structural>`.
//! - Values without backslash or structural chars are returned borrowed.

use std::borrow::Cow;

use crate::constants::structural::BACKSLASH;
use crate::escape::types::Structural;

/// Escape `value` for the given structural character.
///
/// # Notes
/// - Heuristic: a backslash directly followed by `structural` is taken to be an
///   existing escape. A literal backslash that happens to precede the structural
///   character is therefore NOT escaped, and will decode as the bare structural char.
/// - Idempotent for values holding structural chars but no backslashes.
///
/// ```
/// use cef_core::escape::{escape, Structural};
/// assert_eq!(escape("Acme|Corp", Structural::Pipe), r"Acme\|Corp");
/// assert_eq!(escape(r"Acme\|Corp", Structural::Pipe), r"Acme\|Corp");
/// assert_eq!(escape(r"C:\temp", Structural::Equals), r"C:\\temp");
/// ```
pub fn escape(value: &str, structural: Structural) -> Cow<'_, str> {
    let target = structural.as_char();
    if !value.contains(|c: char| c == BACKSLASH || c == target) {
        return Cow::Borrowed(value);
    }

    let mut out = String::with_capacity(value.len() + 8);
    let mut chars = value.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            // Already escaped: keep the pair untouched.
            BACKSLASH if chars.peek() == Some(&target) => {
                out.push(BACKSLASH);
                out.push(target);
                chars.next();
            }
            BACKSLASH => {
                out.push(BACKSLASH);
                out.push(BACKSLASH);
            }
            c if c == target => {
                out.push(BACKSLASH);
                out.push(target);
            }
            c => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// Escape a header field value (`|` and `\`).
#[inline]
pub fn escape_header_value(value: &str) -> Cow<'_, str> {
    escape(value, Structural::Pipe)
}

/// Escape an extension value (`=` and `\`).
#[inline]
pub fn escape_extension_value(value: &str) -> Cow<'_, str> {
    escape(value, Structural::Equals)
}
