// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::errors::DeserializationError;
use crate::externalapis::utils::{get_field, read_hash, read_integer};
use crate::types::address::{ChecksumEthAddress, deserialize_ethereum_address};
use crate::types::hash::make_evm_tx_hash;
use crate::types::primitives::Timestamp;
use crate::types::transactions::{
    CovalentTransaction, EthereumInternalTransaction, EthereumTransaction, EthereumTxRecord,
};
use crate::types::value::{FieldValue, ResponseRecord};
use crate::utils::hexbytes::HexBytes;
use crate::utils::numeric::convert_to_int;
use chrono::DateTime;
use num_bigint::BigInt;

pub const COVALENT_API: &str = "covalent";

/// Seconds since the epoch from a number or numeric string.
pub fn deserialize_timestamp(value: FieldValue<'_>) -> Result<Timestamp, DeserializationError> {
    let number = convert_to_int(value).map_err(|e| {
        DeserializationError::with_source(
            format!("Failed to deserialize a timestamp entry from a {} entry", value.kind()),
            e,
        )
    })?;

    u64::try_from(&number).map(Timestamp).map_err(|_| {
        DeserializationError::new(format!(
            "Failed to deserialize a timestamp entry. Got negative or too large value {}",
            number
        ))
    })
}

/// Seconds since the epoch from an RFC 3339 date such as `2021-03-14T12:39:03Z`.
pub fn deserialize_timestamp_from_iso(date: &str) -> Result<Timestamp, DeserializationError> {
    let parsed = DateTime::parse_from_rfc3339(date).map_err(|e| {
        DeserializationError::with_source(
            format!("Failed to deserialize a timestamp from date {}", date),
            e,
        )
    })?;

    u64::try_from(parsed.timestamp()).map(Timestamp).map_err(|_| {
        DeserializationError::new(format!(
            "Failed to deserialize a timestamp from date {}. It is before the unix epoch",
            date
        ))
    })
}

fn read_u64<R>(data: &R, key: &str, api: &str) -> Result<u64, DeserializationError>
where
    R: ResponseRecord + ?Sized,
{
    let number = read_integer(data, key, api)?;
    u64::try_from(&number).map_err(|_| out_of_range(key, api, &number))
}

fn out_of_range(key: &str, api: &str, number: &BigInt) -> DeserializationError {
    DeserializationError::new(format!(
        "Value {} of {} is out of range during {} transaction query",
        number, key, api
    ))
}

fn read_str<'a, R>(data: &'a R, key: &str, api: &str) -> Result<&'a str, DeserializationError>
where
    R: ResponseRecord + ?Sized,
{
    let value = get_field(data, key, api)?;
    value.as_str().ok_or_else(|| {
        DeserializationError::new(format!(
            "Expected a string for {} during {} transaction query, got {}",
            key,
            api,
            value.kind()
        ))
    })
}

fn read_address<R>(data: &R, key: &str, api: &str) -> Result<ChecksumEthAddress, DeserializationError>
where
    R: ResponseRecord + ?Sized,
{
    let address = read_str(data, key, api)?;
    deserialize_ethereum_address(address).map_err(|e| {
        DeserializationError::with_source(
            format!("Failed to read {} as an address during {} transaction query", key, api),
            e,
        )
    })
}

/// Contract creations have no recipient. Providers send `""` or `null` for it.
fn read_optional_address<R>(
    data: &R,
    key: &str,
    api: &str,
) -> Result<Option<ChecksumEthAddress>, DeserializationError>
where
    R: ResponseRecord + ?Sized,
{
    let value = get_field(data, key, api)?;
    if value.is_null() || value.as_str() == Some("") {
        return Ok(None);
    }
    read_address(data, key, api).map(Some)
}

/// Decode one entry of an Etherscan style `txlist` or `txlistinternal` result.
///
/// `internal` selects which fields are read. Internal entries without a
/// `traceId` get trace id 0.
pub fn deserialize_ethereum_transaction<R>(
    data: &R,
    internal: bool,
    api: &str,
) -> Result<EthereumTxRecord, DeserializationError>
where
    R: ResponseRecord + ?Sized,
{
    let tx_hash = make_evm_tx_hash(read_hash(data, "hash", api)?);
    let timestamp = deserialize_timestamp(get_field(data, "timeStamp", api)?)?;
    let block_number = read_u64(data, "blockNumber", api)?;
    let from_address = read_address(data, "from", api)?;
    let to_address = read_optional_address(data, "to", api)?;
    let value = read_integer(data, "value", api)?;

    if internal {
        let trace_id = if data.contains_field("traceId") {
            let number = read_integer(data, "traceId", api)?;
            i64::try_from(&number).map_err(|_| out_of_range("traceId", api, &number))?
        } else {
            0
        };

        return Ok(EthereumTxRecord::Internal(EthereumInternalTransaction {
            parent_tx_hash: tx_hash,
            trace_id,
            timestamp,
            block_number,
            from_address,
            to_address,
            value,
        }));
    }

    Ok(EthereumTxRecord::Normal(EthereumTransaction {
        tx_hash,
        timestamp,
        block_number,
        from_address,
        to_address,
        value,
        gas: read_integer(data, "gas", api)?,
        gas_price: read_integer(data, "gasPrice", api)?,
        gas_used: read_integer(data, "gasUsed", api)?,
        input_data: HexBytes::new(read_hash(data, "input", api)?),
        nonce: read_u64(data, "nonce", api)?,
    }))
}

/// Decode one item of a Covalent `transactions_v2` response.
pub fn deserialize_covalent_transaction<R>(data: &R) -> Result<CovalentTransaction, DeserializationError>
where
    R: ResponseRecord + ?Sized,
{
    let api = COVALENT_API;
    let block_signed_at = read_str(data, "block_signed_at", api)?;

    Ok(CovalentTransaction {
        tx_hash: read_str(data, "tx_hash", api)?.to_string(),
        timestamp: deserialize_timestamp_from_iso(block_signed_at)?,
        block_number: read_u64(data, "block_height", api)?,
        from_address: read_address(data, "from_address", api)?,
        to_address: read_optional_address(data, "to_address", api)?,
        value: read_integer(data, "value", api)?,
        gas: read_integer(data, "gas_offered", api)?,
        gas_price: read_integer(data, "gas_price", api)?,
        gas_used: read_integer(data, "gas_spent", api)?,
        input_data: "0x".to_string(),
        nonce: 0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::value::{RawRecord, RawValue};
    use serde_json::{Value, json};

    const HASH: &str = "0x9e5c2c0f3e1f8a4b7d6c5e4f3a2b1c0d9e8f7a6b5c4d3e2f1a0b9c8d7e6f5a4b";

    fn etherscan_entry() -> Value {
        json!({
            "blockNumber": "12000000",
            "timeStamp": "1615727943",
            "hash": HASH,
            "nonce": "42",
            "from": "0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed",
            "to": "0xfb6916095ca1df60bb79ce92ce3ea74c37c5d359",
            "value": "1500000000000000000",
            "gas": "21000",
            "gasPrice": "0x174876e800",
            "gasUsed": "21000",
            "input": "0x",
            "isError": "0"
        })
    }

    fn internal_entry() -> Value {
        json!({
            "blockNumber": "12000001",
            "timeStamp": "1615727960",
            "hash": HASH,
            "from": "0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed",
            "to": "",
            "value": "250",
            "traceId": "3"
        })
    }

    #[test]
    fn test_deserialize_timestamp() {
        assert_eq!(deserialize_timestamp(FieldValue::Str("1615727943")).unwrap(), Timestamp(1615727943));
        assert_eq!(deserialize_timestamp((&json!(0)).into()).unwrap(), Timestamp(0));
        assert!(deserialize_timestamp(FieldValue::Str("-5")).is_err());
        assert!(deserialize_timestamp(FieldValue::Str("yesterday")).is_err());
        assert!(deserialize_timestamp((&json!(null)).into()).is_err());
    }

    #[test]
    fn test_deserialize_timestamp_from_iso() {
        assert_eq!(
            deserialize_timestamp_from_iso("2021-03-14T12:39:03Z").unwrap(),
            Timestamp(1615725543)
        );
        assert_eq!(
            deserialize_timestamp_from_iso("2021-03-14T13:39:03+01:00").unwrap(),
            Timestamp(1615725543)
        );
        assert!(deserialize_timestamp_from_iso("14/03/2021").is_err());
        assert!(deserialize_timestamp_from_iso("1969-12-31T23:59:59Z").is_err());
    }

    #[test]
    fn test_deserialize_normal_transaction() {
        let record = deserialize_ethereum_transaction(&etherscan_entry(), false, "etherscan").unwrap();
        let EthereumTxRecord::Normal(tx) = record else {
            panic!("expected a normal transaction");
        };

        assert_eq!(tx.tx_hash.hex(), HASH);
        assert_eq!(tx.timestamp, Timestamp(1615727943));
        assert_eq!(tx.block_number, 12_000_000);
        assert_eq!(tx.from_address.to_checksum(), "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed");
        assert_eq!(
            tx.to_address.map(|a| a.to_checksum()),
            Some("0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359".to_string())
        );
        assert_eq!(tx.value.to_string(), "1500000000000000000");
        assert_eq!(tx.gas_price, BigInt::from(100_000_000_000u64));
        assert!(tx.input_data.is_empty());
        assert_eq!(tx.nonce, 42);
    }

    #[test]
    fn test_deserialize_internal_transaction() {
        let record = deserialize_ethereum_transaction(&internal_entry(), true, "etherscan").unwrap();
        let EthereumTxRecord::Internal(tx) = record else {
            panic!("expected an internal transaction");
        };

        assert_eq!(tx.parent_tx_hash.hex(), HASH);
        assert_eq!(tx.trace_id, 3);
        assert!(tx.to_address.is_none());
        assert_eq!(tx.value, BigInt::from(250));
    }

    #[test]
    fn test_internal_trace_id_defaults_to_zero() {
        let mut entry = internal_entry();
        entry.as_object_mut().unwrap().remove("traceId");
        let record = deserialize_ethereum_transaction(&entry, true, "etherscan").unwrap();
        assert!(matches!(record, EthereumTxRecord::Internal(tx) if tx.trace_id == 0));
    }

    #[test]
    fn test_null_recipient_is_none() {
        let mut entry = etherscan_entry();
        entry["to"] = Value::Null;
        let record = deserialize_ethereum_transaction(&entry, false, "etherscan").unwrap();
        assert!(matches!(record, EthereumTxRecord::Normal(tx) if tx.to_address.is_none()));
    }

    #[test]
    fn test_missing_key_is_reported() {
        let mut entry = etherscan_entry();
        entry.as_object_mut().unwrap().remove("gasUsed");
        let err = deserialize_ethereum_transaction(&entry, false, "etherscan").unwrap_err();
        assert_eq!(err.to_string(), "Missing key gasUsed during etherscan transaction query");
    }

    #[test]
    fn test_invalid_fields_name_the_key() {
        let mut entry = etherscan_entry();
        entry["nonce"] = json!("many");
        let err = deserialize_ethereum_transaction(&entry, false, "etherscan").unwrap_err();
        assert!(err.to_string().contains("nonce"));

        let mut entry = etherscan_entry();
        entry["from"] = json!("0x1234");
        let err = deserialize_ethereum_transaction(&entry, false, "etherscan").unwrap_err();
        assert!(err.to_string().contains("from"));

        let mut entry = etherscan_entry();
        entry["from"] = json!(5);
        assert!(deserialize_ethereum_transaction(&entry, false, "etherscan").is_err());
    }

    #[test]
    fn test_raw_record_with_byte_hash() {
        let mut record = RawRecord::new();
        for (key, value) in etherscan_entry().as_object().unwrap() {
            record.insert(key.clone(), RawValue::Json(value.clone()));
        }
        record.insert("hash".to_string(), RawValue::Bytes(vec![0xab; 32]));

        let parsed = deserialize_ethereum_transaction(&record, false, "etherscan").unwrap();
        let EthereumTxRecord::Normal(tx) = parsed else {
            panic!("expected a normal transaction");
        };
        assert_eq!(tx.tx_hash.as_bytes(), &[0xab; 32]);
    }

    #[test]
    fn test_deserialize_covalent_transaction() {
        let item = json!({
            "block_signed_at": "2021-03-14T12:39:03Z",
            "block_height": 1234567,
            "tx_hash": HASH,
            "from_address": "0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed",
            "to_address": null,
            "value": "123456789012345678901",
            "gas_offered": 8000000,
            "gas_spent": 21000,
            "gas_price": 25000000000u64
        });
        let tx = deserialize_covalent_transaction(&item).unwrap();
        assert_eq!(tx.tx_hash, HASH);
        assert_eq!(tx.timestamp, Timestamp(1615725543));
        assert_eq!(tx.block_number, 1234567);
        assert!(tx.to_address.is_none());
        assert_eq!(tx.gas, BigInt::from(8_000_000));
        assert_eq!(tx.gas_used, BigInt::from(21000));
        assert_eq!(tx.input_data, "0x");
        assert_eq!(tx.nonce, 0);
    }
}
