// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Identifiers of optional tracker modules, CSV import sources and protocol
//! token families.

use crate::errors::DeserializationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Optional DeFi and chain modules a user can turn on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModuleName {
    MakerdaoDsr,
    MakerdaoVaults,
    Aave,
    Compound,
    YearnVaults,
    YearnVaultsV2,
    Uniswap,
    Adex,
    Loopring,
    Balancer,
    Eth2,
    Sushiswap,
    Liquity,
    PickleFinance,
    Nfts,
}

/// Modules that stay off unless the user enables them.
pub const DEFAULT_OFF_MODULES: [ModuleName; 3] = [
    ModuleName::MakerdaoDsr,
    ModuleName::YearnVaults,
    ModuleName::Adex,
];

impl ModuleName {
    pub const ALL: [ModuleName; 15] = [
        ModuleName::MakerdaoDsr,
        ModuleName::MakerdaoVaults,
        ModuleName::Aave,
        ModuleName::Compound,
        ModuleName::YearnVaults,
        ModuleName::YearnVaultsV2,
        ModuleName::Uniswap,
        ModuleName::Adex,
        ModuleName::Loopring,
        ModuleName::Balancer,
        ModuleName::Eth2,
        ModuleName::Sushiswap,
        ModuleName::Liquity,
        ModuleName::PickleFinance,
        ModuleName::Nfts,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            ModuleName::MakerdaoDsr => "makerdao_dsr",
            ModuleName::MakerdaoVaults => "makerdao_vaults",
            ModuleName::Aave => "aave",
            ModuleName::Compound => "compound",
            ModuleName::YearnVaults => "yearn_vaults",
            ModuleName::YearnVaultsV2 => "yearn_vaults_v2",
            ModuleName::Uniswap => "uniswap",
            ModuleName::Adex => "adex",
            ModuleName::Loopring => "loopring",
            ModuleName::Balancer => "balancer",
            ModuleName::Eth2 => "eth2",
            ModuleName::Sushiswap => "sushiswap",
            ModuleName::Liquity => "liquity",
            ModuleName::PickleFinance => "pickle_finance",
            ModuleName::Nfts => "nfts",
        }
    }

    /// Name shown to users.
    pub fn display_name(&self) -> &'static str {
        match self {
            ModuleName::MakerdaoDsr => "MakerDAO DSR",
            ModuleName::MakerdaoVaults => "MakerDAO Vaults",
            ModuleName::Aave => "Aave",
            ModuleName::Compound => "Compound",
            ModuleName::YearnVaults => "Yearn Vaults",
            ModuleName::YearnVaultsV2 => "Yearn V2 Vaults",
            ModuleName::Uniswap => "Uniswap",
            ModuleName::Adex => "AdEx",
            ModuleName::Loopring => "Loopring",
            ModuleName::Balancer => "Balancer",
            ModuleName::Eth2 => "Eth2",
            ModuleName::Sushiswap => "Sushiswap",
            ModuleName::Liquity => "Liquity",
            ModuleName::PickleFinance => "Pickle Finance",
            ModuleName::Nfts => "NFTs",
        }
    }

    pub fn is_default_on(&self) -> bool {
        !DEFAULT_OFF_MODULES.contains(self)
    }

    /// Modules enabled for a fresh account.
    pub fn default_on() -> impl Iterator<Item = ModuleName> {
        ModuleName::ALL.into_iter().filter(ModuleName::is_default_on)
    }
}

impl FromStr for ModuleName {
    type Err = DeserializationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ModuleName::ALL
            .into_iter()
            .find(|module| module.id() == s)
            .ok_or_else(|| DeserializationError::new(format!("Unknown module name {}", s)))
    }
}

impl fmt::Display for ModuleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Sources whose CSV exports can be imported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ImportableLocation {
    #[serde(rename = "cointracking.info")]
    Cointracking,
    #[serde(rename = "cryptocom")]
    Cryptocom,
    #[serde(rename = "blockfi-transactions")]
    BlockfiTransactions,
    #[serde(rename = "blockfi-trades")]
    BlockfiTrades,
    #[serde(rename = "nexo")]
    Nexo,
    #[serde(rename = "gitcoin")]
    Gitcoin,
    #[serde(rename = "shapeshift-trades")]
    ShapeshiftTrades,
    #[serde(rename = "uphold")]
    Uphold,
    #[serde(rename = "bisq")]
    Bisq,
}

impl ImportableLocation {
    pub const ALL: [ImportableLocation; 9] = [
        ImportableLocation::Cointracking,
        ImportableLocation::Cryptocom,
        ImportableLocation::BlockfiTransactions,
        ImportableLocation::BlockfiTrades,
        ImportableLocation::Nexo,
        ImportableLocation::Gitcoin,
        ImportableLocation::ShapeshiftTrades,
        ImportableLocation::Uphold,
        ImportableLocation::Bisq,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            ImportableLocation::Cointracking => "cointracking.info",
            ImportableLocation::Cryptocom => "cryptocom",
            ImportableLocation::BlockfiTransactions => "blockfi-transactions",
            ImportableLocation::BlockfiTrades => "blockfi-trades",
            ImportableLocation::Nexo => "nexo",
            ImportableLocation::Gitcoin => "gitcoin",
            ImportableLocation::ShapeshiftTrades => "shapeshift-trades",
            ImportableLocation::Uphold => "uphold",
            ImportableLocation::Bisq => "bisq",
        }
    }
}

impl FromStr for ImportableLocation {
    type Err = DeserializationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ImportableLocation::ALL
            .into_iter()
            .find(|location| location.id() == s)
            .ok_or_else(|| {
                DeserializationError::new(format!("Unknown importable location {}", s))
            })
    }
}

impl fmt::Display for ImportableLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Token families minted by a protocol rather than listed individually.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KnownProtocolAsset {
    #[serde(rename = "UNI-V2")]
    Uniswap,
    #[serde(rename = "yearn_vaults_v2")]
    YearnVaultsV2,
    #[serde(rename = "curve_pool")]
    CurvePool,
}

impl KnownProtocolAsset {
    pub const ALL: [KnownProtocolAsset; 3] = [
        KnownProtocolAsset::Uniswap,
        KnownProtocolAsset::YearnVaultsV2,
        KnownProtocolAsset::CurvePool,
    ];

    pub fn protocol(&self) -> &'static str {
        match self {
            KnownProtocolAsset::Uniswap => "UNI-V2",
            KnownProtocolAsset::YearnVaultsV2 => "yearn_vaults_v2",
            KnownProtocolAsset::CurvePool => "curve_pool",
        }
    }

    /// `None` for assets not issued by one of the known protocols.
    pub fn from_protocol(protocol: &str) -> Option<Self> {
        KnownProtocolAsset::ALL
            .into_iter()
            .find(|asset| asset.protocol() == protocol)
    }
}

impl fmt::Display for KnownProtocolAsset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.protocol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_module_ids_match_serde() {
        for module in ModuleName::ALL {
            assert_eq!(serde_json::to_value(module).unwrap(), json!(module.id()));
            assert_eq!(module.id().parse::<ModuleName>().unwrap(), module);
        }
    }

    #[test]
    fn test_default_off_modules() {
        assert!(!ModuleName::Adex.is_default_on());
        assert!(ModuleName::Uniswap.is_default_on());
        assert_eq!(ModuleName::default_on().count(), 12);
    }

    #[test]
    fn test_module_display_names() {
        assert_eq!(ModuleName::YearnVaultsV2.display_name(), "Yearn V2 Vaults");
        assert_eq!(ModuleName::Nfts.display_name(), "NFTs");
    }

    #[test]
    fn test_importable_locations() {
        let location: ImportableLocation = serde_json::from_value(json!("cointracking.info")).unwrap();
        assert_eq!(location, ImportableLocation::Cointracking);
        assert_eq!("shapeshift-trades".parse::<ImportableLocation>().unwrap(), ImportableLocation::ShapeshiftTrades);
        assert!("binance".parse::<ImportableLocation>().is_err());
    }

    #[test]
    fn test_known_protocol_assets() {
        assert_eq!(KnownProtocolAsset::from_protocol("UNI-V2"), Some(KnownProtocolAsset::Uniswap));
        assert_eq!(KnownProtocolAsset::from_protocol("uni-v2"), None);
        assert_eq!(KnownProtocolAsset::CurvePool.to_string(), "curve_pool");
    }
}
