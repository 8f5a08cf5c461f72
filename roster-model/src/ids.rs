use crate::error::{ModelError, Result};
use std::fmt;

/// Identifier of a catalog item, taken from the trailing segment of its
/// resource URL.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ItemId(String);

impl ItemId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Derive the id from a resource URL such as
    /// `https://pokeapi.co/api/v2/pokemon/25/`.
    pub fn from_resource_url(url: &str) -> Result<Self> {
        url.split('/')
            .filter(|segment| !segment.is_empty())
            .next_back()
            .filter(|segment| !segment.contains(':'))
            .map(|segment| Self(segment.to_string()))
            .ok_or_else(|| ModelError::InvalidResourceUrl(url.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ItemId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ItemId {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
