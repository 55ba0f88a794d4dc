// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::errors::DeserializationError;
use crate::types::db_enum::{DbEnum, define_db_enum};

define_db_enum! {
    /// Supported locations: exchanges, blockchains and offline holdings.
    pub enum Location: "location" {
        External = 1, "EXTERNAL";
        Kraken = 2, "KRAKEN";
        Poloniex = 3, "POLONIEX";
        Bittrex = 4, "BITTREX";
        Binance = 5, "BINANCE";
        Bitmex = 6, "BITMEX";
        Coinbase = 7, "COINBASE";
        Total = 8, "TOTAL";
        Banks = 9, "BANKS";
        Blockchain = 10, "BLOCKCHAIN";
        CoinbasePro = 11, "COINBASEPRO";
        Gemini = 12, "GEMINI";
        Equities = 13, "EQUITIES";
        RealEstate = 14, "REALESTATE";
        Commodities = 15, "COMMODITIES";
        Cryptocom = 16, "CRYPTOCOM";
        Uniswap = 17, "UNISWAP";
        Bitstamp = 18, "BITSTAMP";
        BinanceUs = 19, "BINANCEUS";
        Bitfinex = 20, "BITFINEX";
        BitcoinDe = 21, "BITCOINDE";
        Iconomi = 22, "ICONOMI";
        Kucoin = 23, "KUCOIN";
        Balancer = 24, "BALANCER";
        Loopring = 25, "LOOPRING";
        Ftx = 26, "FTX";
        Nexo = 27, "NEXO";
        BlockFi = 28, "BLOCKFI";
        IndependentReserve = 29, "INDEPENDENTRESERVE";
        Gitcoin = 30, "GITCOIN";
        Sushiswap = 31, "SUSHISWAP";
        Shapeshift = 32, "SHAPESHIFT";
        Uphold = 33, "UPHOLD";
        Bitpanda = 34, "BITPANDA";
        Bisq = 35, "BISQ";
        FtxUs = 36, "FTXUS";
    }
}

impl Location {
    pub fn deserialize(value: &str) -> Result<Self, DeserializationError> {
        Self::deserialize_by_name(value)
    }

    /// Whether trades for this location come from imported files rather than an API.
    pub fn is_external_exchange(&self) -> bool {
        EXTERNAL_EXCHANGES.contains(self)
    }
}

/// Exchanges whose history is only ever imported, never queried.
pub const EXTERNAL_EXCHANGES: [Location; 6] = [
    Location::Cryptocom,
    Location::BlockFi,
    Location::Nexo,
    Location::Shapeshift,
    Location::Uphold,
    Location::Bisq,
];

pub const EXTERNAL_LOCATION: [Location; 7] = [
    Location::External,
    Location::Cryptocom,
    Location::BlockFi,
    Location::Nexo,
    Location::Shapeshift,
    Location::Uphold,
    Location::Bisq,
];
