// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Thin newtypes over strings, bytes and numbers.

use crate::errors::DeserializationError;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Seconds since the unix epoch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(pub u64);

impl Timestamp {
    pub fn as_u64(&self) -> u64 {
        self.0
    }

    pub fn to_ms(&self) -> TimestampMS {
        TimestampMS(self.0.saturating_mul(1000))
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for Timestamp {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// Milliseconds since the unix epoch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TimestampMS(pub u64);

impl TimestampMS {
    /// Truncates to whole seconds.
    pub fn to_seconds(&self) -> Timestamp {
        Timestamp(self.0 / 1000)
    }
}

impl fmt::Display for TimestampMS {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

macro_rules! string_newtype {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }
    };
}

string_newtype!(ApiKey);
string_newtype!(
    /// Market pair as given by the exchange, e.g. `ETH_BTC`.
    TradePair
);
string_newtype!(TradeId);
string_newtype!(EventType);

/// API secret as raw bytes. Crosses serde boundaries as a plain string.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ApiSecret(Vec<u8>);

impl ApiSecret {
    pub fn new(secret: Vec<u8>) -> Self {
        Self(secret)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

// Secrets never show up in logs.
impl fmt::Debug for ApiSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiSecret(<redacted>)")
    }
}

impl Serialize for ApiSecret {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&String::from_utf8_lossy(&self.0))
    }
}

impl<'de> Deserialize<'de> for ApiSecret {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Self(s.into_bytes()))
    }
}

/// Bytes that travel base64 encoded.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct B64EncodedBytes(Vec<u8>);

impl B64EncodedBytes {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn encode(&self) -> B64EncodedString {
        B64EncodedString(STANDARD.encode(&self.0))
    }
}

/// Text known to be valid standard base64.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct B64EncodedString(String);

impl B64EncodedString {
    pub fn deserialize(value: &str) -> Result<Self, DeserializationError> {
        STANDARD.decode(value).map_err(|e| {
            DeserializationError::with_source(format!("Invalid base64 string {}", value), e)
        })?;
        Ok(Self(value.to_string()))
    }

    pub fn decode(&self) -> Result<B64EncodedBytes, DeserializationError> {
        STANDARD
            .decode(&self.0)
            .map(B64EncodedBytes)
            .map_err(|e| DeserializationError::with_source("Invalid base64 string", e))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for B64EncodedString {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        B64EncodedString::deserialize(&s).map_err(serde::de::Error::custom)
    }
}

/// Six hex digit RGB color, stored lowercase and without `#`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct HexColorCode(String);

impl HexColorCode {
    pub fn deserialize(value: &str) -> Result<Self, DeserializationError> {
        let digits = value.strip_prefix('#').unwrap_or(value);
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(DeserializationError::new(format!(
                "The given color code value \"{}\" is not a valid hex color code",
                value
            )));
        }
        Ok(Self(digits.to_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for HexColorCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        HexColorCode::deserialize(&s).map_err(serde::de::Error::custom)
    }
}

macro_rules! decimal_newtype {
    ($(#[$meta:meta])* $name:ident, $what:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(pub BigDecimal);

        impl $name {
            pub fn deserialize(value: &str) -> Result<Self, DeserializationError> {
                BigDecimal::from_str(value.trim()).map(Self).map_err(|e| {
                    DeserializationError::with_source(
                        format!("Failed to deserialize {} from {}", $what, value),
                        e,
                    )
                })
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.collect_str(&self.0)
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let s = String::deserialize(deserializer)?;
                $name::deserialize(&s).map_err(serde::de::Error::custom)
            }
        }
    };
}

decimal_newtype!(Fee, "fee");
decimal_newtype!(Price, "price");
decimal_newtype!(
    /// Amount of an asset, exact to any precision.
    AssetAmount,
    "asset amount"
);
