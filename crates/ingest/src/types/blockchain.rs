// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::errors::DeserializationError;
use crate::types::address::{
    BlockchainAddress, BtcAddress, Eth2PubKey, KusamaAddress, PolkadotAddress,
    deserialize_ethereum_address,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Blockchains for which account tracking is supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SupportedBlockchain {
    #[serde(rename = "ETH")]
    Ethereum,
    #[serde(rename = "ETH2")]
    EthereumBeaconchain,
    #[serde(rename = "BTC")]
    Bitcoin,
    #[serde(rename = "KSM")]
    Kusama,
    #[serde(rename = "AVAX")]
    Avalanche,
    #[serde(rename = "DOT")]
    Polkadot,
}

/// Shape of the account identifiers used on a chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressKind {
    ChecksumEth,
    Eth2PubKey,
    Btc,
    Kusama,
    Polkadot,
}

impl SupportedBlockchain {
    pub const ALL: [SupportedBlockchain; 6] = [
        SupportedBlockchain::Ethereum,
        SupportedBlockchain::EthereumBeaconchain,
        SupportedBlockchain::Bitcoin,
        SupportedBlockchain::Kusama,
        SupportedBlockchain::Avalanche,
        SupportedBlockchain::Polkadot,
    ];

    pub fn symbol(&self) -> &'static str {
        match self {
            SupportedBlockchain::Ethereum => "ETH",
            SupportedBlockchain::EthereumBeaconchain => "ETH2",
            SupportedBlockchain::Bitcoin => "BTC",
            SupportedBlockchain::Kusama => "KSM",
            SupportedBlockchain::Avalanche => "AVAX",
            SupportedBlockchain::Polkadot => "DOT",
        }
    }

    pub fn address_kind(&self) -> AddressKind {
        match self {
            SupportedBlockchain::Ethereum | SupportedBlockchain::Avalanche => AddressKind::ChecksumEth,
            SupportedBlockchain::EthereumBeaconchain => AddressKind::Eth2PubKey,
            SupportedBlockchain::Bitcoin => AddressKind::Btc,
            SupportedBlockchain::Kusama => AddressKind::Kusama,
            SupportedBlockchain::Polkadot => AddressKind::Polkadot,
        }
    }

    /// Coin type for ENS multichain address resolution.
    ///
    /// See <https://eips.ethereum.org/EIPS/eip-2304>. The beacon chain has none.
    pub fn ens_coin_type(&self) -> Option<u32> {
        match self {
            SupportedBlockchain::Ethereum => Some(60),
            SupportedBlockchain::Bitcoin => Some(0),
            SupportedBlockchain::Kusama => Some(434),
            SupportedBlockchain::Polkadot => Some(354),
            SupportedBlockchain::Avalanche => Some(9000),
            SupportedBlockchain::EthereumBeaconchain => None,
        }
    }

    /// Validate `value` as an account on this chain.
    pub fn deserialize_address(&self, value: &str) -> Result<BlockchainAddress, DeserializationError> {
        let address = match self.address_kind() {
            AddressKind::ChecksumEth => BlockchainAddress::Ethereum(deserialize_ethereum_address(value)?),
            AddressKind::Eth2PubKey => BlockchainAddress::Eth2(Eth2PubKey::deserialize(value)?),
            AddressKind::Btc => BlockchainAddress::Bitcoin(BtcAddress::deserialize(value)?),
            AddressKind::Kusama => BlockchainAddress::Kusama(KusamaAddress::deserialize(value)?),
            AddressKind::Polkadot => BlockchainAddress::Polkadot(PolkadotAddress::deserialize(value)?),
        };
        Ok(address)
    }
}

impl FromStr for SupportedBlockchain {
    type Err = DeserializationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SupportedBlockchain::ALL
            .into_iter()
            .find(|chain| chain.symbol() == s)
            .ok_or_else(|| {
                DeserializationError::new(format!("Unknown blockchain symbol {}", s))
            })
    }
}

impl fmt::Display for SupportedBlockchain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_symbols_round_trip() {
        for chain in SupportedBlockchain::ALL {
            assert_eq!(chain.symbol().parse::<SupportedBlockchain>().unwrap(), chain);
            assert_eq!(serde_json::to_value(chain).unwrap(), json!(chain.symbol()));
        }
        assert!("eth".parse::<SupportedBlockchain>().is_err());
    }

    #[test]
    fn test_ens_coin_types() {
        assert_eq!(SupportedBlockchain::Ethereum.ens_coin_type(), Some(60));
        assert_eq!(SupportedBlockchain::Bitcoin.ens_coin_type(), Some(0));
        assert_eq!(SupportedBlockchain::Kusama.ens_coin_type(), Some(434));
        assert_eq!(SupportedBlockchain::Polkadot.ens_coin_type(), Some(354));
        assert_eq!(SupportedBlockchain::Avalanche.ens_coin_type(), Some(9000));
        assert_eq!(SupportedBlockchain::EthereumBeaconchain.ens_coin_type(), None);
    }

    #[test]
    fn test_evm_chains_share_address_kind() {
        assert_eq!(
            SupportedBlockchain::Avalanche.address_kind(),
            SupportedBlockchain::Ethereum.address_kind()
        );
    }

    #[test]
    fn test_deserialize_address_per_chain() {
        let eth = SupportedBlockchain::Ethereum
            .deserialize_address("0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed")
            .unwrap();
        assert_eq!(eth.to_string(), "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed");

        assert!(SupportedBlockchain::Polkadot
            .deserialize_address("0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed")
            .is_err());
        assert!(matches!(
            SupportedBlockchain::Bitcoin.deserialize_address("1BoatSLRHtKNngkdXEeobR76b53LETtpyT"),
            Ok(BlockchainAddress::Bitcoin(_))
        ));
    }
}
