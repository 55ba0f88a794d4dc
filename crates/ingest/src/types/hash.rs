// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::errors::DeserializationError;
use crate::types::value::FieldValue;
use crate::utils::hexbytes::{HexBytes, bytes_from_value};
use primitive_types::H256;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Hash of an EVM transaction.
///
/// This provides a single source of truth for how transaction hashes are
/// formatted in API responses: `0x` followed by lowercase hex.
///
/// Neither constructor checks for 32 bytes. That belongs to the layer that
/// validates input with schema context; [`EvmTxHash::to_h256`] is there for
/// code that needs the fixed-size form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EvmTxHash(HexBytes);

impl EvmTxHash {
    /// Get the hash as bytes
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    pub fn hex(&self) -> String {
        self.0.hex()
    }

    pub fn to_h256(&self) -> Option<H256> {
        (self.0.len() == 32).then(|| H256::from_slice(self.as_bytes()))
    }

    pub fn into_inner(self) -> HexBytes {
        self.0
    }
}

/// Deserialize a transaction hash from bytes or a hex string.
pub fn deserialize_evm_tx_hash<'a>(
    val: impl Into<FieldValue<'a>>,
) -> Result<EvmTxHash, DeserializationError> {
    bytes_from_value(val.into()).map(|bytes| EvmTxHash(HexBytes::new(bytes)))
}

/// Wrap bytes that are already trusted, e.g. read back from storage.
pub fn make_evm_tx_hash(val: impl Into<Vec<u8>>) -> EvmTxHash {
    EvmTxHash(HexBytes::new(val.into()))
}

impl From<H256> for EvmTxHash {
    fn from(hash: H256) -> Self {
        make_evm_tx_hash(hash.as_bytes())
    }
}

impl From<[u8; 32]> for EvmTxHash {
    fn from(bytes: [u8; 32]) -> Self {
        make_evm_tx_hash(bytes)
    }
}

impl AsRef<[u8]> for EvmTxHash {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

/// Display implementation for API responses
/// Format: "0x" followed by lowercase hex characters
impl fmt::Display for EvmTxHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
