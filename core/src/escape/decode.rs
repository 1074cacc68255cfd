// ## 📂 File: `src/escape/decode.rs`
//! src/escape/decode.rs
//!
//! Unescaping (CEF-safe -> literal) and splitting on unescaped delimiters.
//!
//! Design notes:
//! - Single left-to-right pass; `\\` is consumed as a unit so its second
//!   backslash never pairs with a following structural char.
//! - A lone backslash before any other char is kept verbatim.
//! - `split_unescaped` is used by the codec only: it finds the real delimiters
//!   with the same pairing rule and never rewrites the text it splits.

use std::borrow::Cow;

use crate::constants::structural::BACKSLASH;
use crate::escape::types::Structural;

/// Inverse of [`escape`](crate::escape::escape): `\<structural>` -> `<structural>`, `\\` -> `\`.
///
/// ```
/// use cef_core::escape::{unescape, Structural};
/// assert_eq!(unescape(r"Acme\|Corp", Structural::Pipe), "Acme|Corp");
/// assert_eq!(unescape(r"a\=b \\ c", Structural::Equals), r"a=b \ c");
/// ```
pub fn unescape(value: &str, structural: Structural) -> Cow<'_, str> {
    if !value.contains(BACKSLASH) {
        return Cow::Borrowed(value);
    }

    let target = structural.as_char();
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars().peekable();
    while let Some(c) = chars.next() {
        if c != BACKSLASH {
            out.push(c);
            continue;
        }
        match chars.peek() {
            Some(&next) if next == target || next == BACKSLASH => {
                out.push(next);
                chars.next();
            }
            _ => out.push(BACKSLASH),
        }
    }
    Cow::Owned(out)
}

/// Unescape a header field value.
#[inline]
pub fn unescape_header_value(value: &str) -> Cow<'_, str> {
    unescape(value, Structural::Pipe)
}

/// Unescape an extension value.
#[inline]
pub fn unescape_extension_value(value: &str) -> Cow<'_, str> {
    unescape(value, Structural::Equals)
}

/// Split `value` on every unescaped structural char, into at most `limit`
/// pieces (the last piece keeps the remainder).
///
/// `\<structural>` and `\\` are skipped as units, so the backslash of a `\\`
/// pair never escapes a following delimiter. Pieces borrow `value` and stay in
/// wire form.
pub(crate) fn split_unescaped(value: &str, structural: Structural, limit: usize) -> Vec<&str> {
    let target = structural.as_char();
    let mut pieces = Vec::new();
    let mut start = 0;
    let mut chars = value.char_indices();
    while pieces.len() + 1 < limit {
        let Some((i, c)) = chars.next() else { break };
        if c == BACKSLASH {
            chars.next();
        } else if c == target {
            pieces.push(&value[start..i]);
            start = i + c.len_utf8();
        }
    }
    pieces.push(&value[start..]);
    pieces
}
