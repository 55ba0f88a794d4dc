// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Domain types shared by every decoder.
//!
//! This module contains newtype wrappers and enums that give loosely typed
//! API values a single validated representation, plus the transaction
//! records built from them.

pub mod db_enum;

pub mod address;
pub mod blockchain;
pub mod credentials;
pub mod hash;
pub mod location;
pub mod modules;
pub mod primitives;
pub mod service;
pub mod trade;
pub mod transactions;
pub mod value;

pub use address::{
    BlockchainAddress, BtcAddress, ChecksumEthAddress, Eth2PubKey, KusamaAddress,
    PolkadotAddress, deserialize_ethereum_address,
};
pub use blockchain::{AddressKind, SupportedBlockchain};
pub use credentials::{BlockchainAccountData, ExchangeApiCredentials, ExternalServiceApiCredentials};
pub use db_enum::DbEnum;
pub use hash::{EvmTxHash, deserialize_evm_tx_hash, make_evm_tx_hash};
pub use location::Location;
pub use modules::{DEFAULT_OFF_MODULES, ImportableLocation, KnownProtocolAsset, ModuleName};
pub use primitives::{
    ApiKey, ApiSecret, AssetAmount, B64EncodedBytes, B64EncodedString, EventType, Fee,
    HexColorCode, Price, Timestamp, TimestampMS, TradeId, TradePair,
};
pub use service::ExternalService;
pub use trade::{AssetMovementCategory, TradeType};
pub use transactions::{
    CovalentTransaction, EthereumInternalTransaction, EthereumTransaction, EthereumTxRecord,
    TransactionRecord,
};
pub use value::{FieldValue, RawRecord, RawValue, ResponseRecord};
