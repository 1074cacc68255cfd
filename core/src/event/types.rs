// ## 📂 File: `src/event/types.rs`

//! event/types.rs
//! CEF event data model: header, extension, event.
//!
//! Invariants:
//! - Header values are stored ESCAPED (`\|`, `\\`); encoding concatenates them as-is.
//!   Escaping runs once, when a value is set.
//! - Extension values are stored UNESCAPED; the encoder escapes, the decoder unescapes.
//! - Extension iteration follows insertion order; overwriting a key keeps its slot.

use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::codec::{decode_event_with, encode_event, DecodeError};
use crate::config::CodecConfig;
use crate::constants::HEADER_FIELD_COUNT;
use crate::escape::{escape_header_value, unescape_header_value};
use crate::event::field::{FieldLookup, HeaderField};

// -----------------------------------------------------------------------------
// Header
// -----------------------------------------------------------------------------

/// The six mandatory header fields, stored in escaped wire form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Header {
    fields: [String; HEADER_FIELD_COUNT],
}

impl Default for Header {
    /// Header filled from `DEFAULT_HEADER`.
    /// Defaults hold no structural characters, so stored == logical.
    fn default() -> Self {
        Self {
            fields: HeaderField::ALL.map(|field| field.default_value().to_owned()),
        }
    }
}

impl Header {
    /// Stored (escaped) value.
    #[inline]
    pub fn get(&self, field: HeaderField) -> &str {
        &self.fields[field.slot()]
    }

    /// Logical (unescaped) value.
    #[inline]
    pub fn value(&self, field: HeaderField) -> Cow<'_, str> {
        unescape_header_value(self.get(field))
    }

    /// Escape `value` and store it.
    pub fn set(&mut self, field: HeaderField, value: &str) {
        self.fields[field.slot()] = escape_header_value(value).into_owned();
    }

    /// Store a value that is already in wire form (decoder path).
    #[inline]
    pub(crate) fn set_escaped(&mut self, field: HeaderField, escaped: String) {
        self.fields[field.slot()] = escaped;
    }

    /// `(field, stored value)` in wire order.
    pub fn iter(&self) -> impl Iterator<Item = (HeaderField, &str)> + '_ {
        HeaderField::ALL
            .into_iter()
            .zip(self.fields.iter().map(String::as_str))
    }
}

impl Serialize for Header {
    /// JSON view: `{ "deviceVendor": <logical value>, ... }`.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(HEADER_FIELD_COUNT))?;
        for field in HeaderField::ALL {
            map.serialize_entry(field.canonical_name(), &self.value(field))?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Header {
    /// Keys go through the alias table (unknown ones are skipped);
    /// missing fields keep their defaults; values are escaped on the way in.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct HeaderVisitor;

        impl<'de> Visitor<'de> for HeaderVisitor {
            type Value = Header;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of CEF header field names to string values")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Header, A::Error> {
                let mut header = Header::default();
                while let Some((key, value)) = access.next_entry::<String, String>()? {
                    if let FieldLookup::Found(field) = HeaderField::resolve(&key) {
                        header.set(field, &value);
                    }
                }
                Ok(header)
            }
        }

        deserializer.deserialize_map(HeaderVisitor)
    }
}

// -----------------------------------------------------------------------------
// Extension
// -----------------------------------------------------------------------------

/// Ordered `key=value` extension pairs with unique keys.
///
/// Keys are indexed, so insert and lookup stay constant-time and decoding is
/// linear in the number of pairs. `remove` shifts later slots and is linear.
#[derive(Debug, Clone, Default)]
pub struct Extension {
    entries: Vec<(String, String)>,
    slots: HashMap<String, usize>,
}

impl Extension {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite. An overwritten key keeps its original position.
    /// Returns the previous value, if any.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let key = key.into();
        let value = value.into();
        match self.slots.get(&key).copied() {
            Some(i) => Some(std::mem::replace(&mut self.entries[i].1, value)),
            None => {
                self.slots.insert(key.clone(), self.entries.len());
                self.entries.push((key, value));
                None
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.slots.get(key).map(|&i| self.entries[i].1.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.slots.contains_key(key)
    }

    /// Remove `key`, preserving the order of the remaining pairs.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        let i = self.slots.remove(key)?;
        let (_, value) = self.entries.remove(i);
        for (later, _) in &self.entries[i..] {
            if let Some(slot) = self.slots.get_mut(later.as_str()) {
                *slot -= 1;
            }
        }
        Some(value)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.slots.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `(key, value)` in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|(k, _)| k.as_str())
    }
}

// Equality and hashing follow the ordered pairs; the index is derived state.
impl PartialEq for Extension {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl Eq for Extension {}

impl Hash for Extension {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.entries.hash(state);
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for Extension {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Extension {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut ext = Extension::new();
        ext.extend(iter);
        ext
    }
}

impl Serialize for Extension {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self.iter() {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Extension {
    /// Document order is kept; a repeated key overwrites in place.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ExtensionVisitor;

        impl<'de> Visitor<'de> for ExtensionVisitor {
            type Value = Extension;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of CEF extension keys to string values")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Extension, A::Error> {
                let mut ext = Extension::new();
                while let Some((key, value)) = access.next_entry::<String, String>()? {
                    ext.insert(key, value);
                }
                Ok(ext)
            }
        }

        deserializer.deserialize_map(ExtensionVisitor)
    }
}

// -----------------------------------------------------------------------------
// CefEvent
// -----------------------------------------------------------------------------

/// One CEF record: mandatory header + optional extension.
///
/// Not internally synchronized; mutate through `&mut` only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CefEvent {
    #[serde(default)]
    header: Header,
    #[serde(default)]
    extension: Extension,
}

impl CefEvent {
    /// Default header, empty extension.
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults + overrides.
    ///
    /// - Header keys are resolved through the alias table; unknown keys are ignored.
    /// - Header values are escaped; extension values are stored as given.
    pub fn from_parts<HK, HV, EK, EV>(
        header: impl IntoIterator<Item = (HK, HV)>,
        extension: impl IntoIterator<Item = (EK, EV)>,
    ) -> Self
    where
        HK: AsRef<str>,
        HV: AsRef<str>,
        EK: Into<String>,
        EV: Into<String>,
    {
        let mut event = Self::new();
        event.update_header(header);
        event.extension.extend(extension);
        event
    }

    /// Assembles an event from parts already in stored form.
    pub(crate) fn from_decoded(header: Header, extension: Extension) -> Self {
        Self { header, extension }
    }

    #[inline]
    pub fn header(&self) -> &Header {
        &self.header
    }

    #[inline]
    pub fn extension(&self) -> &Extension {
        &self.extension
    }

    /// Extension values carry no escaping invariant, so direct access is fine.
    #[inline]
    pub fn extension_mut(&mut self) -> &mut Extension {
        &mut self.extension
    }

    /// Logical (unescaped) header value.
    #[inline]
    pub fn header_value(&self, field: HeaderField) -> Cow<'_, str> {
        self.header.value(field)
    }

    /// Typed single-field update (value is escaped).
    #[inline]
    pub fn set_header(&mut self, field: HeaderField, value: &str) {
        self.header.set(field, value);
    }

    /// Alias-keyed header update.
    ///
    /// Accepted aliases (case-insensitive): canonical names, `sigid`/`signatureid`
    /// for deviceEventClassId, and positions `1`..`6`. Anything else is skipped.
    pub fn update_header<K, V>(&mut self, updates: impl IntoIterator<Item = (K, V)>) -> &Header
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        for (alias, value) in updates {
            let alias = alias.as_ref();
            match HeaderField::resolve(alias) {
                FieldLookup::Found(field) => self.header.set(field, value.as_ref()),
                FieldLookup::Unrecognized => {
                    tracing::debug!(alias, "ignoring unrecognized CEF header field alias");
                }
            }
        }
        &self.header
    }

    /// Add new pairs or overwrite existing ones.
    pub fn update_extension<K, V>(&mut self, updates: impl IntoIterator<Item = (K, V)>) -> &Extension
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.extension.extend(updates);
        &self.extension
    }

    /// Remove the given keys; missing keys are ignored.
    pub fn remove_extension<K: AsRef<str>>(&mut self, keys: impl IntoIterator<Item = K>) -> &Extension {
        for key in keys {
            self.extension.remove(key.as_ref());
        }
        &self.extension
    }

    pub fn clear_extension(&mut self) {
        self.extension.clear();
    }

    /// Replace this event with the decoded content of `raw`.
    /// On error `self` is left untouched.
    pub fn ingest(&mut self, raw: &str) -> Result<(), DecodeError> {
        self.ingest_with(raw, &CodecConfig::default())
    }

    pub fn ingest_with(&mut self, raw: &str, config: &CodecConfig) -> Result<(), DecodeError> {
        *self = decode_event_with(raw, config)?;
        Ok(())
    }

    /// Encoded record (default config).
    pub fn to_cef_string(&self) -> String {
        encode_event(self)
    }
}

impl fmt::Display for CefEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_cef_string())
    }
}

impl std::str::FromStr for CefEvent {
    type Err = DecodeError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        crate::codec::decode_event(raw)
    }
}
