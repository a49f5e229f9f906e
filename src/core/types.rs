//! Strongly-typed wrappers for catalog identifiers
//!
//! Card ids and set codes are both short strings in the backend ("SVI-006",
//! "SVI"). Wrapping them keeps a set code from being passed where a card id
//! is expected.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Card identifier (primary key of the cards table)
///
/// Examples: "SVI-006", "PAL-123"
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(String);

impl CardId {
    pub fn new(s: impl Into<String>) -> Self {
        CardId(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for CardId {
    fn from(s: String) -> Self {
        CardId(s)
    }
}

impl From<&str> for CardId {
    fn from(s: &str) -> Self {
        CardId(s.to_string())
    }
}

/// Set code (primary key of the card_sets table, prefix of image paths)
///
/// Examples: "SVI", "PAL", "OBF"
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SetCode(String);

impl SetCode {
    pub fn new(s: impl Into<String>) -> Self {
        SetCode(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SetCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for SetCode {
    fn from(s: String) -> Self {
        SetCode(s)
    }
}

impl From<&str> for SetCode {
    fn from(s: &str) -> Self {
        SetCode(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_serialize_as_plain_strings() {
        let id = CardId::new("SVI-006");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"SVI-006\"");

        let code: SetCode = serde_json::from_str("\"SVI\"").unwrap();
        assert_eq!(code.as_str(), "SVI");
        assert_eq!(code.to_string(), "SVI");
    }
}
