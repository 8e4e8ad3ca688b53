//! JSON input records
//!
//! A record carries a reserved `keys` entry with the metadata and one entry
//! per share, keyed by the share identifier:
//!
//! ```json
//! {
//!     "keys": { "n": 4, "k": 3 },
//!     "1": { "base": "10", "value": "4" },
//!     "2": { "base": "2", "value": "111" }
//! }
//! ```
//!
//! Numeric metadata and bases may be written either as JSON numbers or as
//! strings of decimal digits.

use std::collections::BTreeMap;

use anyhow::anyhow;
use serde::Deserialize;

use crate::domain::{Keys, Radix, ShareCount, Threshold};
use crate::error::DecodeError;

/// Key reserved for record metadata
pub const METADATA_KEY: &str = "keys";

/// A number that may be spelled as a JSON number or a JSON string
///
/// Negative and fractional JSON numbers still deserialize (as `Other`) so
/// that an unusable base is reported by the decoder for its share, not as a
/// parse failure of the whole record.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum NumericField {
    Number(u64),
    Other(serde_json::Number),
    Text(String),
}

impl NumericField {
    /// Returns the value if it is a non-negative integer
    #[must_use]
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Other(n) => n.as_u64(),
            Self::Text(s) => s.parse().ok(),
        }
    }
}

impl std::fmt::Display for NumericField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Other(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<u32> for NumericField {
    fn from(value: u32) -> Self {
        Self::Number(value.into())
    }
}

/// One undecoded share: a digit string in some base
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawShare {
    pub base: NumericField,
    pub value: String,
}

impl RawShare {
    pub fn new(base: impl Into<NumericField>, value: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            value: value.into(),
        }
    }

    /// Validates the declared base
    ///
    /// # Errors
    /// Returns [`DecodeError::InvalidBase`] if the base is not an integer in 2..=36
    pub fn radix(&self) -> Result<Radix, DecodeError> {
        self.base
            .as_u64()
            .and_then(|b| u32::try_from(b).ok())
            .ok_or_else(|| DecodeError::InvalidBase(self.base.to_string()))
            .and_then(Radix::new)
    }
}

#[derive(Deserialize)]
struct RawKeys {
    n: NumericField,
    k: NumericField,
}

impl RawKeys {
    fn validate(self) -> anyhow::Result<Keys> {
        let n = self
            .n
            .as_u64()
            .and_then(|v| usize::try_from(v).ok())
            .ok_or_else(|| anyhow!("Share count '{}' is not a valid number", self.n))?;
        let k = self
            .k
            .as_u64()
            .and_then(|v| usize::try_from(v).ok())
            .ok_or_else(|| anyhow!("Threshold '{}' is not a valid number", self.k))?;

        Keys::new(ShareCount::new(n)?, Threshold::new(k)?)
    }
}

/// A complete input record: metadata plus shares keyed by identifier
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ShareRecord {
    #[serde(deserialize_with = "deserialize_keys")]
    pub keys: Keys,
    #[serde(flatten)]
    pub shares: BTreeMap<String, RawShare>,
}

fn deserialize_keys<'de, D>(deserializer: D) -> Result<Keys, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = RawKeys::deserialize(deserializer)?;
    raw.validate().map_err(serde::de::Error::custom)
}

impl ShareRecord {
    /// Creates an empty record with the given metadata
    #[must_use]
    pub fn new(keys: Keys) -> Self {
        Self {
            keys,
            shares: BTreeMap::new(),
        }
    }

    /// Adds (or replaces) the share with identifier `id`
    #[must_use]
    pub fn with_share(mut self, id: impl Into<String>, share: RawShare) -> Self {
        self.shares.insert(id.into(), share);
        self
    }

    /// Parses a record from JSON text
    ///
    /// # Errors
    /// Returns an error if the text is not a well-formed record or the
    /// `keys` metadata is invalid
    ///
    /// # Examples
    ///
    /// ```rust
    /// use shamir_recover::record::ShareRecord;
    ///
    /// let record = ShareRecord::from_json(
    ///     r#"{ "keys": { "n": 2, "k": 2 }, "1": { "base": "10", "value": "4" } }"#,
    /// ).unwrap();
    /// assert_eq!(*record.keys.threshold(), 2);
    /// assert_eq!(record.shares.len(), 1);
    /// ```
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }
}
