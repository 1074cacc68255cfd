//! config.rs
//! Codec policies, loadable from JSON.
//!
//! ```json
//! { "extension_order": "sorted", "version_policy": "strict" }
//! ```
//!
//! Every field is optional; `CodecConfig::default()` is what `encode_event`
//! and `decode_event` use.

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::codec::DecodeError;
use crate::constants::CEF_VERSION_MARKER;

/// Order in which the encoder writes extension pairs.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtensionOrder {
    /// Order of first insertion.
    #[default]
    Insertion,
    /// Lexicographic by key (byte order).
    Sorted,
}

/// How the decoder treats header segment 0.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VersionPolicy {
    /// Segment 0 is ignored.
    #[default]
    Lenient,
    /// Segment 0 must be `CEF:0`, optionally behind a whitespace-separated
    /// syslog prefix.
    Strict,
}

impl VersionPolicy {
    pub fn check(self, marker: &str) -> Result<(), DecodeError> {
        match self {
            VersionPolicy::Lenient => Ok(()),
            VersionPolicy::Strict if is_cef0_marker(marker) => Ok(()),
            VersionPolicy::Strict => Err(DecodeError::UnsupportedVersion {
                marker: marker.to_owned(),
            }),
        }
    }
}

fn is_cef0_marker(segment: &str) -> bool {
    segment
        .trim()
        .strip_suffix(CEF_VERSION_MARKER)
        .is_some_and(|prefix| prefix.is_empty() || prefix.ends_with(char::is_whitespace))
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CodecConfig {
    pub extension_order: ExtensionOrder,
    pub version_policy: VersionPolicy,
}

impl CodecConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn with_extension_order(mut self, order: ExtensionOrder) -> Self {
        self.extension_order = order;
        self
    }

    pub fn with_version_policy(mut self, policy: VersionPolicy) -> Self {
        self.version_policy = policy;
        self
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read codec config: {0}")]
    Io(#[from] io::Error),

    #[error("invalid codec config: {0}")]
    Parse(#[from] serde_json::Error),
}
