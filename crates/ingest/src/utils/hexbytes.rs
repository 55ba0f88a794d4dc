// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::errors::DeserializationError;
use crate::types::value::FieldValue;
use crate::utils::format::hex_with_prefix;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Deref;

/// Decode a hex string, with or without a `0x` prefix, into bytes.
pub fn hexstring_to_bytes(hexstr: &str) -> Result<Vec<u8>, DeserializationError> {
    let digits = strip_hex_prefix(hexstr);
    hex::decode(digits).map_err(|e| {
        DeserializationError::with_source(format!("Failed to turn {} to bytes", hexstr), e)
    })
}

pub(crate) fn strip_hex_prefix(s: &str) -> &str {
    s.strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s)
}

/// Turn a byte buffer or a hex string into bytes.
///
/// Byte buffers are copied as they are, strings go through
/// [`hexstring_to_bytes`] and anything else is rejected with its type.
pub fn bytes_from_value(value: FieldValue<'_>) -> Result<Vec<u8>, DeserializationError> {
    if let FieldValue::Bytes(bytes) = value {
        return Ok(bytes.to_vec());
    }

    match value.as_str() {
        Some(s) => hexstring_to_bytes(s),
        None => Err(DeserializationError::new(format!(
            "Failed to turn {} to bytes: expected a string or bytes but got {}",
            value,
            value.kind()
        ))),
    }
}

/// Owned byte sequence that renders as `0x`-prefixed lowercase hex.
///
/// No length is enforced. Fixed-size views such as [`primitive_types::H256`]
/// are obtained explicitly by the caller when it needs them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HexBytes(Vec<u8>);

impl HexBytes {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    /// Parse from any byte-like or hex string input.
    pub fn deserialize_from<'a>(value: impl Into<FieldValue<'a>>) -> Result<Self, DeserializationError> {
        bytes_from_value(value.into()).map(Self)
    }

    /// `0x` followed by the lowercase hex digits.
    pub fn hex(&self) -> String {
        hex_with_prefix(&self.0)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.0
    }
}

impl Deref for HexBytes {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.0
    }
}

impl AsRef<[u8]> for HexBytes {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for HexBytes {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl From<&[u8]> for HexBytes {
    fn from(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }
}

impl From<HexBytes> for Vec<u8> {
    fn from(bytes: HexBytes) -> Self {
        bytes.0
    }
}

impl fmt::Display for HexBytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex())
    }
}

impl Serialize for HexBytes {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.hex())
    }
}

/// Deserialize from hex string (with or without "0x" prefix)
impl<'de> Deserialize<'de> for HexBytes {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        hexstring_to_bytes(&s)
            .map(Self)
            .map_err(serde::de::Error::custom)
    }
}
