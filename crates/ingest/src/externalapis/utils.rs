// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::errors::DeserializationError;
use crate::types::value::{FieldValue, ResponseRecord};
use crate::utils::hexbytes::bytes_from_value;
use crate::utils::numeric::convert_to_int;
use num_bigint::BigInt;

pub const DEFAULT_API: &str = "etherscan";

/// Fetch `key`, failing with a message that names the key and the API.
pub(crate) fn get_field<'a, R>(data: &'a R, key: &str, api: &str) -> Result<FieldValue<'a>, DeserializationError>
where
    R: ResponseRecord + ?Sized,
{
    data.get_field(key).ok_or_else(|| {
        DeserializationError::new(format!(
            "Missing key {} during {} transaction query",
            key, api
        ))
    })
}

/// Read `key` as raw bytes.
///
/// Bytes already decoded upstream are returned untouched, strings are decoded
/// as hex. The length is not checked here.
pub fn read_hash<R>(data: &R, key: &str, api: &str) -> Result<Vec<u8>, DeserializationError>
where
    R: ResponseRecord + ?Sized,
{
    let value = get_field(data, key, api)?;
    if let FieldValue::Bytes(bytes) = value {
        return Ok(bytes.to_vec());
    }

    bytes_from_value(value).map_err(|e| {
        DeserializationError::with_source(
            format!("Failed to read {} as a hash during {} transaction query", key, api),
            e,
        )
    })
}

/// Read `key` as an integer, see [`convert_to_int`] for accepted shapes.
pub fn read_integer<R>(data: &R, key: &str, api: &str) -> Result<BigInt, DeserializationError>
where
    R: ResponseRecord + ?Sized,
{
    let value = get_field(data, key, api)?;
    convert_to_int(value).map_err(|e| {
        DeserializationError::with_source(
            format!("Failed to read {} as an integer during {} transaction query", key, api),
            e,
        )
    })
}
