// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Loosely typed input as it comes out of an external API response.

use serde_json::{Map, Value};
use std::collections::{BTreeMap, HashMap};

/// Borrowed view of one field of an external record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    /// Already decoded bytes, e.g. a hash handed over by a web3 client.
    Bytes(&'a [u8]),
    Str(&'a str),
    Json(&'a Value),
}

impl<'a> FieldValue<'a> {
    /// Name of the underlying type, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            FieldValue::Bytes(_) => "bytes",
            FieldValue::Str(_) => "string",
            FieldValue::Json(value) => json_kind(value),
        }
    }

    pub fn as_str(&self) -> Option<&'a str> {
        match self {
            FieldValue::Str(s) => Some(s),
            FieldValue::Json(Value::String(s)) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Json(Value::Null))
    }
}

impl std::fmt::Display for FieldValue<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldValue::Bytes(bytes) => write!(f, "0x{}", hex::encode(bytes)),
            FieldValue::Str(s) => f.write_str(s),
            FieldValue::Json(Value::String(s)) => f.write_str(s),
            FieldValue::Json(value) => write!(f, "{}", value),
        }
    }
}

impl<'a> From<&'a str> for FieldValue<'a> {
    fn from(value: &'a str) -> Self {
        FieldValue::Str(value)
    }
}

impl<'a> From<&'a String> for FieldValue<'a> {
    fn from(value: &'a String) -> Self {
        FieldValue::Str(value.as_str())
    }
}

impl<'a> From<&'a [u8]> for FieldValue<'a> {
    fn from(value: &'a [u8]) -> Self {
        FieldValue::Bytes(value)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for FieldValue<'a> {
    fn from(value: &'a [u8; N]) -> Self {
        FieldValue::Bytes(value.as_slice())
    }
}

impl<'a> From<&'a Vec<u8>> for FieldValue<'a> {
    fn from(value: &'a Vec<u8>) -> Self {
        FieldValue::Bytes(value.as_slice())
    }
}

impl<'a> From<&'a Value> for FieldValue<'a> {
    fn from(value: &'a Value) -> Self {
        FieldValue::Json(value)
    }
}

impl<'a> From<&'a RawValue> for FieldValue<'a> {
    fn from(value: &'a RawValue) -> Self {
        match value {
            RawValue::Bytes(bytes) => FieldValue::Bytes(bytes),
            RawValue::Json(value) => FieldValue::Json(value),
        }
    }
}

pub fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Owned field of a record whose values were partially decoded upstream.
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    Bytes(Vec<u8>),
    Json(Value),
}

impl From<Vec<u8>> for RawValue {
    fn from(value: Vec<u8>) -> Self {
        RawValue::Bytes(value)
    }
}

impl From<Value> for RawValue {
    fn from(value: Value) -> Self {
        RawValue::Json(value)
    }
}

/// A record as returned by a web3 client: hashes already arrive as bytes.
pub type RawRecord = BTreeMap<String, RawValue>;

/// One external API response record, keyed by field name.
pub trait ResponseRecord {
    fn get_field(&self, key: &str) -> Option<FieldValue<'_>>;

    fn contains_field(&self, key: &str) -> bool {
        self.get_field(key).is_some()
    }
}

impl ResponseRecord for Map<String, Value> {
    fn get_field(&self, key: &str) -> Option<FieldValue<'_>> {
        self.get(key).map(FieldValue::Json)
    }
}

impl ResponseRecord for Value {
    fn get_field(&self, key: &str) -> Option<FieldValue<'_>> {
        self.as_object().and_then(|map| map.get_field(key))
    }
}

impl ResponseRecord for BTreeMap<String, RawValue> {
    fn get_field(&self, key: &str) -> Option<FieldValue<'_>> {
        self.get(key).map(FieldValue::from)
    }
}

impl ResponseRecord for HashMap<String, RawValue> {
    fn get_field(&self, key: &str) -> Option<FieldValue<'_>> {
        self.get(key).map(FieldValue::from)
    }
}
