// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Transaction records decoded from block explorer APIs.
//!
//! Two records describe the same transaction when their identifiers match,
//! whatever the remaining fields hold. Explorers occasionally disagree on
//! secondary fields such as `gas_used` for one transaction, and such
//! duplicates must collapse into one entry.

use crate::types::address::ChecksumEthAddress;
use crate::types::hash::EvmTxHash;
use crate::types::primitives::Timestamp;
use crate::utils::format::serialize_integer;
use crate::utils::hexbytes::HexBytes;
use num_bigint::BigInt;
use serde_json::{Map, Value, json};
use std::hash::{Hash, Hasher};

fn address_value(address: Option<&ChecksumEthAddress>) -> Value {
    address.map_or(Value::Null, |a| Value::String(a.to_checksum()))
}

/// A normal Ethereum transaction.
#[derive(Debug, Clone)]
pub struct EthereumTransaction {
    pub tx_hash: EvmTxHash,
    pub timestamp: Timestamp,
    pub block_number: u64,
    pub from_address: ChecksumEthAddress,
    pub to_address: Option<ChecksumEthAddress>,
    pub value: BigInt,
    pub gas: BigInt,
    pub gas_price: BigInt,
    pub gas_used: BigInt,
    pub input_data: HexBytes,
    pub nonce: u64,
}

impl EthereumTransaction {
    pub fn identifier(&self) -> String {
        format!("{}{}{}", self.tx_hash.hex(), self.from_address, self.nonce)
    }

    /// API form. Wei amounts and gas figures are decimal strings.
    pub fn serialize(&self) -> Value {
        json!({
            "tx_hash": self.tx_hash.hex(),
            "timestamp": self.timestamp.as_u64(),
            "block_number": self.block_number,
            "from_address": self.from_address.to_checksum(),
            "to_address": address_value(self.to_address.as_ref()),
            "value": self.value.to_string(),
            "gas": self.gas.to_string(),
            "gas_price": self.gas_price.to_string(),
            "gas_used": self.gas_used.to_string(),
            "input_data": self.input_data.hex(),
            "nonce": self.nonce,
            "identifier": self.identifier(),
        })
    }
}

impl PartialEq for EthereumTransaction {
    fn eq(&self, other: &Self) -> bool {
        self.identifier() == other.identifier()
    }
}

impl Eq for EthereumTransaction {}

impl Hash for EthereumTransaction {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.identifier().hash(state);
    }
}

/// A value transfer made by contract code inside a parent transaction.
#[derive(Debug, Clone)]
pub struct EthereumInternalTransaction {
    pub parent_tx_hash: EvmTxHash,
    pub trace_id: i64,
    pub timestamp: Timestamp,
    pub block_number: u64,
    pub from_address: ChecksumEthAddress,
    pub to_address: Option<ChecksumEthAddress>,
    pub value: BigInt,
}

impl EthereumInternalTransaction {
    pub fn identifier(&self) -> String {
        format!("{}{}", self.parent_tx_hash.hex(), self.trace_id)
    }

    pub fn serialize(&self) -> Value {
        json!({
            "parent_tx_hash": self.parent_tx_hash.hex(),
            "trace_id": self.trace_id,
            "timestamp": self.timestamp.as_u64(),
            "block_number": self.block_number,
            "from_address": self.from_address.to_checksum(),
            "to_address": address_value(self.to_address.as_ref()),
            "value": self.value.to_string(),
        })
    }
}

impl PartialEq for EthereumInternalTransaction {
    fn eq(&self, other: &Self) -> bool {
        self.identifier() == other.identifier()
    }
}

impl Eq for EthereumInternalTransaction {}

impl Hash for EthereumInternalTransaction {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.identifier().hash(state);
    }
}

/// A transaction as reported by Covalent.
///
/// Covalent does not return input data or nonce, so those hold `0x` and 0.
#[derive(Debug, Clone)]
pub struct CovalentTransaction {
    pub tx_hash: String,
    pub timestamp: Timestamp,
    pub block_number: u64,
    pub from_address: ChecksumEthAddress,
    pub to_address: Option<ChecksumEthAddress>,
    pub value: BigInt,
    pub gas: BigInt,
    pub gas_price: BigInt,
    pub gas_used: BigInt,
    pub input_data: String,
    pub nonce: u64,
}

impl CovalentTransaction {
    pub fn identifier(&self) -> String {
        let from = self.from_address.to_checksum();
        format!(
            "{}{}{}",
            self.tx_hash,
            from.trim_start_matches("0x"),
            self.nonce
        )
    }

    /// API form. Integers past 2^53 - 1 become decimal strings.
    pub fn serialize(&self) -> Value {
        let mut result = Map::new();
        result.insert("tx_hash".into(), Value::String(self.tx_hash.clone()));
        result.insert("timestamp".into(), serialize_integer(&BigInt::from(self.timestamp.as_u64())));
        result.insert("block_number".into(), serialize_integer(&BigInt::from(self.block_number)));
        result.insert("from_address".into(), Value::String(self.from_address.to_checksum()));
        result.insert("to_address".into(), address_value(self.to_address.as_ref()));
        result.insert("value".into(), serialize_integer(&self.value));
        result.insert("gas".into(), serialize_integer(&self.gas));
        result.insert("gas_price".into(), serialize_integer(&self.gas_price));
        result.insert("gas_used".into(), serialize_integer(&self.gas_used));
        result.insert("input_data".into(), Value::String(self.input_data.clone()));
        result.insert("nonce".into(), serialize_integer(&BigInt::from(self.nonce)));
        Value::Object(result)
    }
}

impl PartialEq for CovalentTransaction {
    fn eq(&self, other: &Self) -> bool {
        self.identifier() == other.identifier()
    }
}

impl Eq for CovalentTransaction {}

impl Hash for CovalentTransaction {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.identifier().hash(state);
    }
}

/// Output of decoding an Etherscan style transaction entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EthereumTxRecord {
    Normal(EthereumTransaction),
    Internal(EthereumInternalTransaction),
}

/// Any decoded transaction record.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TransactionRecord {
    Ethereum(EthereumTransaction),
    Internal(EthereumInternalTransaction),
    Covalent(CovalentTransaction),
}

impl TransactionRecord {
    pub fn identifier(&self) -> String {
        match self {
            TransactionRecord::Ethereum(tx) => tx.identifier(),
            TransactionRecord::Internal(tx) => tx.identifier(),
            TransactionRecord::Covalent(tx) => tx.identifier(),
        }
    }

    pub fn serialize(&self) -> Value {
        match self {
            TransactionRecord::Ethereum(tx) => tx.serialize(),
            TransactionRecord::Internal(tx) => tx.serialize(),
            TransactionRecord::Covalent(tx) => tx.serialize(),
        }
    }
}

impl From<EthereumTxRecord> for TransactionRecord {
    fn from(record: EthereumTxRecord) -> Self {
        match record {
            EthereumTxRecord::Normal(tx) => TransactionRecord::Ethereum(tx),
            EthereumTxRecord::Internal(tx) => TransactionRecord::Internal(tx),
        }
    }
}

impl From<CovalentTransaction> for TransactionRecord {
    fn from(tx: CovalentTransaction) -> Self {
        TransactionRecord::Covalent(tx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::address::deserialize_ethereum_address;
    use crate::types::hash::deserialize_evm_tx_hash;
    use std::collections::HashSet;

    const HASH: &str = "0x5f4c4d8f5a3a8ae4c5cfd2dbbf5bb22a0e1b9bd20d6f5e8a2b9b7b4c3a2f1e0d";
    const FROM: &str = "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed";
    const TO: &str = "0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359";

    fn eth_tx() -> EthereumTransaction {
        EthereumTransaction {
            tx_hash: deserialize_evm_tx_hash(HASH).unwrap(),
            timestamp: Timestamp(1_600_000_000),
            block_number: 10_843_000,
            from_address: deserialize_ethereum_address(FROM).unwrap(),
            to_address: Some(deserialize_ethereum_address(TO).unwrap()),
            value: "1000000000000000000".parse().unwrap(),
            gas: BigInt::from(21000),
            gas_price: BigInt::from(50_000_000_000u64),
            gas_used: BigInt::from(21000),
            input_data: HexBytes::new(vec![]),
            nonce: 7,
        }
    }

    fn internal_tx() -> EthereumInternalTransaction {
        EthereumInternalTransaction {
            parent_tx_hash: deserialize_evm_tx_hash(HASH).unwrap(),
            trace_id: 2,
            timestamp: Timestamp(1_600_000_000),
            block_number: 10_843_000,
            from_address: deserialize_ethereum_address(FROM).unwrap(),
            to_address: None,
            value: BigInt::from(5),
        }
    }

    fn covalent_tx() -> CovalentTransaction {
        CovalentTransaction {
            tx_hash: HASH.to_string(),
            timestamp: Timestamp(1_600_000_000),
            block_number: 10_843_000,
            from_address: deserialize_ethereum_address(FROM).unwrap(),
            to_address: Some(deserialize_ethereum_address(TO).unwrap()),
            value: "123456789012345678901".parse().unwrap(),
            gas: BigInt::from(21000),
            gas_price: BigInt::from(25_000_000_000u64),
            gas_used: BigInt::from(21000),
            input_data: "0x".to_string(),
            nonce: 0,
        }
    }

    #[test]
    fn test_ethereum_identifier() {
        assert_eq!(eth_tx().identifier(), format!("{}{}7", HASH, FROM));
    }

    #[test]
    fn test_ethereum_equality_ignores_other_fields() {
        let a = eth_tx();
        let mut b = eth_tx();
        b.gas_used = BigInt::from(1);
        b.block_number = 1;
        assert_eq!(a, b);

        let mut c = eth_tx();
        c.nonce = 8;
        assert_ne!(a, c);

        let set: HashSet<_> = [a, b, c].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_ethereum_serialize_shapes() {
        let value = eth_tx().serialize();
        assert_eq!(value["tx_hash"], json!(HASH));
        assert_eq!(value["value"], json!("1000000000000000000"));
        assert_eq!(value["gas"], json!("21000"));
        assert_eq!(value["gas_price"], json!("50000000000"));
        assert_eq!(value["gas_used"], json!("21000"));
        assert_eq!(value["input_data"], json!("0x"));
        assert_eq!(value["timestamp"], json!(1_600_000_000u64));
        assert_eq!(value["nonce"], json!(7));
        assert_eq!(value["to_address"], json!(TO));
        assert_eq!(value["identifier"], json!(eth_tx().identifier()));
    }

    #[test]
    fn test_internal_identifier_and_serialize() {
        let tx = internal_tx();
        assert_eq!(tx.identifier(), format!("{}2", HASH));

        let value = tx.serialize();
        assert_eq!(value["parent_tx_hash"], json!(HASH));
        assert_eq!(value["trace_id"], json!(2));
        assert_eq!(value["value"], json!("5"));
        assert_eq!(value["to_address"], Value::Null);
        assert!(value.get("identifier").is_none());
    }

    #[test]
    fn test_internal_equality() {
        let mut other = internal_tx();
        other.value = BigInt::from(99);
        assert_eq!(internal_tx(), other);
        other.trace_id = 3;
        assert_ne!(internal_tx(), other);
    }

    #[test]
    fn test_covalent_identifier_drops_prefix() {
        assert_eq!(
            covalent_tx().identifier(),
            format!("{}{}0", HASH, FROM.trim_start_matches("0x"))
        );
    }

    #[test]
    fn test_covalent_serialize_safe_integer_rule() {
        let value = covalent_tx().serialize();
        assert_eq!(value["value"], json!("123456789012345678901"));
        assert_eq!(value["gas"], json!(21000));
        assert_eq!(value["gas_price"], json!(25_000_000_000u64));
        assert_eq!(value["block_number"], json!(10_843_000));
        assert_eq!(value["nonce"], json!(0));
        assert_eq!(value["input_data"], json!("0x"));
    }

    #[test]
    fn test_record_conversions() {
        let record: TransactionRecord = EthereumTxRecord::Internal(internal_tx()).into();
        assert_eq!(record.identifier(), internal_tx().identifier());
        assert!(matches!(record, TransactionRecord::Internal(_)));
    }
}
