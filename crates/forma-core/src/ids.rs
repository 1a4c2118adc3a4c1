//! Native document identifier.
//!
//! Documents are keyed by a 12-byte identifier that crosses every component
//! boundary as a 24-character lowercase hex string. Parsing is the only way
//! to obtain an `ObjectId` from caller input, so a value of this type is
//! always syntactically valid.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::CoreError;

/// Length of the hex rendering of an `ObjectId`.
pub const OBJECT_ID_HEX_LEN: usize = 24;

/// A 12-byte native document identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId([u8; 12]);

impl ObjectId {
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 12]) -> Self {
        Self(bytes)
    }

    #[must_use]
    pub const fn bytes(&self) -> [u8; 12] {
        self.0
    }

    /// Check whether `s` is a syntactically valid identifier: exactly 24 hex
    /// characters. Upper-case digits are accepted and normalized on render.
    #[must_use]
    pub fn is_valid(s: &str) -> bool {
        s.len() == OBJECT_ID_HEX_LEN && s.bytes().all(|b| b.is_ascii_hexdigit())
    }

    /// Parse a 24-character hex string.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidIdentifier` if `s` is not exactly 24 hex
    /// characters.
    pub fn parse(s: &str) -> Result<Self, CoreError> {
        if !Self::is_valid(s) {
            return Err(CoreError::InvalidIdentifier(s.to_string()));
        }
        let mut bytes = [0u8; 12];
        hex::decode_to_slice(s, &mut bytes)
            .map_err(|_| CoreError::InvalidIdentifier(s.to_string()))?;
        Ok(Self(bytes))
    }

    /// Render as 24 lowercase hex characters.
    #[must_use]
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for ObjectId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for ObjectId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for ObjectId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_render_roundtrip() {
        let id = ObjectId::parse("65a1f0c2e4b0a1b2c3d4e5f6").unwrap();
        assert_eq!(id.to_hex(), "65a1f0c2e4b0a1b2c3d4e5f6");
        assert_eq!(id.to_string(), "65a1f0c2e4b0a1b2c3d4e5f6");
    }

    #[test]
    fn uppercase_input_renders_lowercase() {
        let id = ObjectId::parse("65A1F0C2E4B0A1B2C3D4E5F6").unwrap();
        assert_eq!(id.to_hex(), "65a1f0c2e4b0a1b2c3d4e5f6");
    }

    #[test]
    fn rejects_wrong_length_and_non_hex() {
        for bad in [
            "invalid_id",
            "",
            "65a1f0c2e4b0a1b2c3d4e5f",
            "65a1f0c2e4b0a1b2c3d4e5f6a",
            "65a1f0c2e4b0a1b2c3d4e5g6",
        ] {
            assert!(!ObjectId::is_valid(bad), "{bad} should be invalid");
            assert!(matches!(
                ObjectId::parse(bad),
                Err(CoreError::InvalidIdentifier(s)) if s == bad
            ));
        }
    }

    #[test]
    fn mixed_case_input_decodes_to_the_same_bytes() {
        let lower = ObjectId::parse("abcdef0123456789abcdef01").unwrap();
        let mixed = ObjectId::parse("AbCdEf0123456789aBcDeF01").unwrap();
        assert_eq!(lower, mixed);
        assert_eq!(mixed.bytes()[0], 0xab);
        assert_eq!(mixed.to_hex(), "abcdef0123456789abcdef01");
    }

    #[test]
    fn bytes_match_hex_digits() {
        let id = ObjectId::parse("000102030405060708090a0b").unwrap();
        assert_eq!(id.bytes(), [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11]);
        assert_eq!(ObjectId::from_bytes(id.bytes()), id);
    }

    #[test]
    fn serde_uses_hex_string() {
        let id = ObjectId::parse("65a1f0c2e4b0a1b2c3d4e5f6").unwrap();
        let json = serde_json::to_value(id).unwrap();
        assert_eq!(json, serde_json::json!("65a1f0c2e4b0a1b2c3d4e5f6"));
        let back: ObjectId = serde_json::from_value(json).unwrap();
        assert_eq!(back, id);
        assert!(serde_json::from_value::<ObjectId>(serde_json::json!("nope")).is_err());
    }
}
