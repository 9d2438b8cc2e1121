//! Common types used across the application

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::shared::errors::IdentifierError;

/// Length of an on-chain address in bytes
pub const ADDRESS_LENGTH: usize = 32;

/// 32-byte on-chain address, rendered as `0x` + 64 lowercase hex digits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Address([u8; ADDRESS_LENGTH]);

impl Address {
    pub fn as_bytes(&self) -> &[u8; ADDRESS_LENGTH] {
        &self.0
    }

    /// Parse a hex address. The `0x` prefix is optional and short forms
    /// (`0x2`) are left-padded with zeros.
    pub fn parse(s: &str) -> Result<Self, IdentifierError> {
        let trimmed = s.trim();
        let digits = trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
            .unwrap_or(trimmed);

        if digits.is_empty() {
            return Err(IdentifierError::Empty);
        }
        if digits.len() > ADDRESS_LENGTH * 2 {
            return Err(IdentifierError::TooLong(s.to_string()));
        }

        let padded = format!("{:0>width$}", digits, width = ADDRESS_LENGTH * 2);
        let mut bytes = [0u8; ADDRESS_LENGTH];
        hex::decode_to_slice(&padded, &mut bytes)
            .map_err(|_| IdentifierError::InvalidHex(s.to_string()))?;

        Ok(Self(bytes))
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl FromStr for Address {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for Address {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// Id of a published Move package
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PackageId(pub Address);

/// Id of an on-chain object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObjectId(pub Address);

macro_rules! address_newtype {
    ($name:ident) => {
        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        impl FromStr for $name {
            type Err = IdentifierError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Address::parse(s).map(Self)
            }
        }
    };
}

address_newtype!(PackageId);
address_newtype!(ObjectId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_address_is_padded() {
        let addr = Address::parse("0x2").unwrap();
        assert_eq!(
            addr.to_string(),
            "0x0000000000000000000000000000000000000000000000000000000000000002"
        );
        assert_eq!(addr.as_bytes()[31], 2);
    }

    #[test]
    fn test_address_is_lowercased() {
        let addr: Address = "0xABC".parse().unwrap();
        assert!(addr.to_string().ends_with("abc"));
        assert_eq!(addr, Address::parse("abc").unwrap());
    }

    #[test]
    fn test_invalid_addresses() {
        assert_eq!(Address::parse(""), Err(IdentifierError::Empty));
        assert_eq!(Address::parse("0x"), Err(IdentifierError::Empty));
        assert!(matches!(Address::parse("0xHero1"), Err(IdentifierError::InvalidHex(_))));

        let too_long = format!("0x{}", "a".repeat(65));
        assert!(matches!(Address::parse(&too_long), Err(IdentifierError::TooLong(_))));
    }

    #[test]
    fn test_newtypes_serialize_as_strings() {
        let object: ObjectId = "0x5".parse().unwrap();
        let json = serde_json::to_string(&object).unwrap();
        assert_eq!(json, format!("\"{}\"", object));

        let back: ObjectId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, object);
        assert_eq!(object.to_string().len(), 66);
    }
}
