// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::errors::DeserializationError;
use crate::types::db_enum::{DbEnum, define_db_enum};
use lazy_static::lazy_static;
use std::collections::HashMap;

define_db_enum! {
    pub enum TradeType: "trade type" {
        Buy = 1, "BUY";
        Sell = 2, "SELL";
        SettlementBuy = 3, "SETTLEMENT_BUY";
        SettlementSell = 4, "SETTLEMENT_SELL";
    }
}

/// Every spelling a provider uses for each trade type. Matched exactly.
const TRADE_TYPE_ALIASES: &[(TradeType, &[&str])] = &[
    (TradeType::Buy, &["buy", "LIMIT_BUY", "BUY", "Buy"]),
    (TradeType::Sell, &["sell", "LIMIT_SELL", "SELL", "Sell"]),
    (TradeType::SettlementBuy, &["settlement_buy", "settlement buy"]),
    (TradeType::SettlementSell, &["settlement_sell", "settlement sell"]),
];

lazy_static! {
    static ref TRADE_TYPE_BY_ALIAS: HashMap<&'static str, TradeType> = TRADE_TYPE_ALIASES
        .iter()
        .flat_map(|(trade_type, aliases)| aliases.iter().map(move |alias| (*alias, *trade_type)))
        .collect();
}

impl TradeType {
    /// Map a provider spelling to a trade type.
    ///
    /// Unlike the other DB enums this does not fall back to case-insensitive
    /// name matching, only the listed aliases are accepted.
    pub fn deserialize(symbol: &str) -> Result<Self, DeserializationError> {
        TRADE_TYPE_BY_ALIAS.get(symbol).copied().ok_or_else(|| {
            DeserializationError::new(format!(
                "Failed to deserialize trade type symbol. Unknown symbol {} for trade type",
                symbol
            ))
        })
    }

    pub fn aliases(&self) -> &'static [&'static str] {
        TRADE_TYPE_ALIASES
            .iter()
            .find(|(trade_type, _)| trade_type == self)
            .map(|(_, aliases)| *aliases)
            .unwrap_or(&[])
    }
}

define_db_enum! {
    /// Supported asset movement types, so far only deposits and withdrawals.
    pub enum AssetMovementCategory: "asset movement category" {
        Deposit = 1, "DEPOSIT";
        Withdrawal = 2, "WITHDRAWAL";
    }
}

impl AssetMovementCategory {
    pub fn deserialize(value: &str) -> Result<Self, DeserializationError> {
        Self::deserialize_by_name(value)
    }
}
