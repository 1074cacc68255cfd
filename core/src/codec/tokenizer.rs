// ## 📂 File: `src/codec/tokenizer.rs`
//! src/codec/tokenizer.rs
//!
//! Extension tokenizer: one space-delimited string -> ordered `(key, value)` pairs.
//!
//! The format is ambiguous: values may contain spaces and nothing marks where a
//! value ends and the next key begins. The rule used here (and by other CEF
//! consumers) is positional:
//!
//! 1. Split on every unescaped `=`, giving N+1 fragments for N pairs.
//! 2. The trailing whitespace-free token of fragment i is the key of pair i.
//! 3. Whatever precedes that token in fragment i is the value of pair i-1.
//! 4. The last fragment is pure value.
//!
//! Known misparse: a value whose last word looks like `word=` (with the `=`
//! unescaped) is read as a new key. Text before the first key is dropped.
//! Both are properties of the format, kept on purpose so the output matches
//! other consumers.

use crate::codec::types::DecodeError;
use crate::escape::decode::split_unescaped;
use crate::escape::types::Structural;

/// Tokenize an extension block.
///
/// # Returns
/// - Pairs in encounter order. Values are trimmed but still ESCAPED (`\=`, `\\`);
///   the decoder unescapes them. Duplicate keys are returned as-is.
/// - `Err(DecodeError::MalformedExtension)` when a fragment has no trailing key
///   token, or an interior fragment has no whitespace between value and key.
///
/// ```
/// use cef_core::codec::tokenize_extension;
/// let pairs = tokenize_extension("src=10.0.0.1 msg=simple test").unwrap();
/// assert_eq!(pairs, vec![
///     ("src".to_string(), "10.0.0.1".to_string()),
///     ("msg".to_string(), "simple test".to_string()),
/// ]);
/// ```
pub fn tokenize_extension(block: &str) -> Result<Vec<(String, String)>, DecodeError> {
    let fragments = split_unescaped(block, Structural::Equals, usize::MAX);

    tracing::trace!(fragments = fragments.len(), "tokenizing CEF extension");

    // Always at least one fragment.
    let last = fragments.len() - 1;
    let mut pairs = Vec::with_capacity(last);

    for i in 0..last {
        let key = trailing_token(fragments[i]).ok_or_else(|| malformed(i, fragments[i]))?;

        let next = fragments[i + 1];
        let value = if i + 1 == last {
            next.trim()
        } else {
            leading_value(next).ok_or_else(|| malformed(i + 1, next))?
        };

        pairs.push((key.to_owned(), value.to_owned()));
    }

    Ok(pairs)
}

/// Longest whitespace-free suffix; `None` if the fragment is empty or ends in whitespace.
fn trailing_token(fragment: &str) -> Option<&str> {
    let start = fragment
        .char_indices()
        .rev()
        .find(|(_, c)| c.is_whitespace())
        .map_or(0, |(i, c)| i + c.len_utf8());
    let token = &fragment[start..];
    (!token.is_empty()).then_some(token)
}

/// Value part of an interior fragment: everything before the trailing key
/// token, which must be separated from it by whitespace. Trimmed.
fn leading_value(fragment: &str) -> Option<&str> {
    let token = trailing_token(fragment)?;
    let prefix = &fragment[..fragment.len() - token.len()];
    prefix
        .ends_with(char::is_whitespace)
        .then(|| prefix.trim())
}

fn malformed(fragment_index: usize, fragment: &str) -> DecodeError {
    DecodeError::MalformedExtension {
        fragment_index,
        fragment: fragment.to_owned(),
    }
}
