use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

#[cfg(feature = "schema")]
use schemars::JsonSchema;

use crate::ModelError;

/// Single label rendered as a literal `key=value` string.
///
/// This is the form used in label selectors and `--label` style flags.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase", try_from = "KeyValueRepr")]
pub struct KeyValue {
    /// Label key, e.g. `skaffold.dev/run-id`.
    key: String,
    /// Label value.
    value: String,
}

impl KeyValue {
    /// Create a new key–value pair.
    pub fn new<K, V>(key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Get the key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Get the value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Split into owned key and value.
    pub fn into_parts(self) -> (String, String) {
        (self.key, self.value)
    }
}

impl fmt::Display for KeyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}

/// Parses `key=value`, splitting on the first `=` only.
impl FromStr for KeyValue {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('=') {
            Some((key, value)) if !key.is_empty() => Ok(Self::new(key, value)),
            _ => Err(ModelError::InvalidKeyValue(s.to_string())),
        }
    }
}

/// Unvalidated wire form; the key must be non-empty to become a [`KeyValue`].
#[derive(Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
struct KeyValueRepr {
    key: String,
    value: String,
}

impl TryFrom<KeyValueRepr> for KeyValue {
    type Error = ModelError;

    fn try_from(repr: KeyValueRepr) -> Result<Self, Self::Error> {
        if repr.key.is_empty() {
            return Err(ModelError::InvalidKeyValue(format!("={}", repr.value)));
        }
        Ok(Self::new(repr.key, repr.value))
    }
}

impl From<(String, String)> for KeyValue {
    fn from((key, value): (String, String)) -> Self {
        Self { key, value }
    }
}

impl From<(&str, &str)> for KeyValue {
    fn from((key, value): (&str, &str)) -> Self {
        Self::new(key, value)
    }
}
