// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Account address types for every supported blockchain.

use crate::errors::DeserializationError;
use crate::utils::format::hex_with_prefix;
use crate::utils::hexbytes::strip_hex_prefix;
use primitive_types::H160;
use serde::{Deserialize, Serialize};
use sp_core::crypto::{AccountId32, Ss58AddressFormat, Ss58Codec};
use std::fmt;
use std::str::FromStr;

const POLKADOT_SS58_PREFIX: u16 = 0;
const KUSAMA_SS58_PREFIX: u16 = 2;
const ETH2_PUBKEY_LENGTH: usize = 48;

/// EVM account address, rendered in EIP-55 mixed-case checksum form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChecksumEthAddress(H160);

impl ChecksumEthAddress {
    pub fn new(address: H160) -> Self {
        Self(address)
    }

    pub fn inner(&self) -> &H160 {
        &self.0
    }

    pub fn as_bytes(&self) -> &[u8; 20] {
        self.0.as_fixed_bytes()
    }

    /// The address as `0x` + EIP-55 checksummed hex.
    pub fn to_checksum(&self) -> String {
        let lower = hex::encode(self.0.as_bytes());
        let hash = sp_crypto_hashing::keccak_256(lower.as_bytes());

        let mut out = String::with_capacity(42);
        out.push_str("0x");
        for (i, c) in lower.chars().enumerate() {
            let nibble = (hash[i / 2] >> (if i % 2 == 0 { 4 } else { 0 })) & 0x0f;
            if c.is_ascii_alphabetic() && nibble >= 8 {
                out.push(c.to_ascii_uppercase());
            } else {
                out.push(c);
            }
        }
        out
    }
}

/// Parse an EVM address in any letter case into its checksummed form.
pub fn deserialize_ethereum_address(symbol: &str) -> Result<ChecksumEthAddress, DeserializationError> {
    let digits = strip_hex_prefix(symbol);
    if digits.len() != 40 {
        return Err(DeserializationError::new(format!(
            "Invalid ethereum address: {}. Expected 40 hex digits, got {}",
            symbol,
            digits.len()
        )));
    }

    let bytes = hex::decode(digits).map_err(|e| {
        DeserializationError::with_source(format!("Invalid ethereum address: {}", symbol), e)
    })?;
    Ok(ChecksumEthAddress(H160::from_slice(&bytes)))
}

impl FromStr for ChecksumEthAddress {
    type Err = DeserializationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        deserialize_ethereum_address(s)
    }
}

impl From<H160> for ChecksumEthAddress {
    fn from(address: H160) -> Self {
        Self(address)
    }
}

impl fmt::Display for ChecksumEthAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_checksum())
    }
}

impl Serialize for ChecksumEthAddress {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_checksum())
    }
}

impl<'de> Deserialize<'de> for ChecksumEthAddress {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        deserialize_ethereum_address(&s).map_err(serde::de::Error::custom)
    }
}

/// Bitcoin address. Only checked for being a single non-empty token.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BtcAddress(String);

impl BtcAddress {
    pub fn deserialize(value: &str) -> Result<Self, DeserializationError> {
        let value = value.trim();
        if value.is_empty() || value.contains(char::is_whitespace) {
            return Err(DeserializationError::new(format!(
                "Invalid bitcoin address: '{}'",
                value
            )));
        }
        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// BLS public key of an Eth2 validator, `0x` + 96 hex digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Eth2PubKey(String);

impl Eth2PubKey {
    pub fn deserialize(value: &str) -> Result<Self, DeserializationError> {
        let digits = strip_hex_prefix(value);
        let bytes = hex::decode(digits).map_err(|e| {
            DeserializationError::with_source(format!("Invalid eth2 public key: {}", value), e)
        })?;
        if bytes.len() != ETH2_PUBKEY_LENGTH {
            return Err(DeserializationError::new(format!(
                "Invalid eth2 public key: {}. Expected {} bytes, got {}",
                value,
                ETH2_PUBKEY_LENGTH,
                bytes.len()
            )));
        }
        Ok(Self(hex_with_prefix(&bytes)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn deserialize_ss58(value: &str, expected_prefix: u16, chain: &str) -> Result<String, DeserializationError> {
    let (_, format) = AccountId32::from_ss58check_with_version(value).map_err(|e| {
        DeserializationError::new(format!("Invalid {} address {}: {:?}", chain, value, e))
    })?;

    if format.prefix() != expected_prefix {
        return Err(DeserializationError::new(format!(
            "Invalid {} address {}: network prefix {} instead of {}",
            chain,
            value,
            format.prefix(),
            expected_prefix
        )));
    }
    Ok(value.to_string())
}

/// Kusama account in SS58 form (network prefix 2).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KusamaAddress(String);

impl KusamaAddress {
    pub fn deserialize(value: &str) -> Result<Self, DeserializationError> {
        deserialize_ss58(value, KUSAMA_SS58_PREFIX, "kusama").map(Self)
    }

    pub fn from_account(account: &AccountId32) -> Self {
        Self(account.to_ss58check_with_version(Ss58AddressFormat::custom(KUSAMA_SS58_PREFIX)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Polkadot account in SS58 form (network prefix 0).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PolkadotAddress(String);

impl PolkadotAddress {
    pub fn deserialize(value: &str) -> Result<Self, DeserializationError> {
        deserialize_ss58(value, POLKADOT_SS58_PREFIX, "polkadot").map(Self)
    }

    pub fn from_account(account: &AccountId32) -> Self {
        Self(account.to_ss58check_with_version(Ss58AddressFormat::custom(POLKADOT_SS58_PREFIX)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// An address on any of the supported blockchains.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum BlockchainAddress {
    Ethereum(ChecksumEthAddress),
    Eth2(Eth2PubKey),
    Bitcoin(BtcAddress),
    Kusama(KusamaAddress),
    Polkadot(PolkadotAddress),
}

impl fmt::Display for BlockchainAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlockchainAddress::Ethereum(address) => write!(f, "{}", address),
            BlockchainAddress::Eth2(key) => f.write_str(key.as_str()),
            BlockchainAddress::Bitcoin(address) => f.write_str(address.as_str()),
            BlockchainAddress::Kusama(address) => f.write_str(address.as_str()),
            BlockchainAddress::Polkadot(address) => f.write_str(address.as_str()),
        }
    }
}
