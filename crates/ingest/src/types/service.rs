// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::errors::DeserializationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Third-party data providers that need credentials.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ExternalService {
    Etherscan = 0,
    Cryptocompare = 1,
    Beaconchain = 2,
    Loopring = 3,
    Opensea = 4,
    Covalent = 5,
}

impl ExternalService {
    pub const ALL: [ExternalService; 6] = [
        ExternalService::Etherscan,
        ExternalService::Cryptocompare,
        ExternalService::Beaconchain,
        ExternalService::Loopring,
        ExternalService::Opensea,
        ExternalService::Covalent,
    ];

    pub fn code(&self) -> u8 {
        *self as u8
    }

    /// Lowercase name, as stored and sent over the API.
    pub fn serialize(&self) -> &'static str {
        match self {
            ExternalService::Etherscan => "etherscan",
            ExternalService::Cryptocompare => "cryptocompare",
            ExternalService::Beaconchain => "beaconchain",
            ExternalService::Loopring => "loopring",
            ExternalService::Opensea => "opensea",
            ExternalService::Covalent => "covalent",
        }
    }

    pub fn deserialize(value: &str) -> Result<Self, DeserializationError> {
        let wanted = value.trim().to_lowercase();
        ExternalService::ALL
            .into_iter()
            .find(|service| service.serialize() == wanted)
            .ok_or_else(|| {
                DeserializationError::new(format!(
                    "Failed to deserialize external service value {}",
                    value
                ))
            })
    }
}

impl fmt::Display for ExternalService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(ExternalService::serialize(self))
    }
}

impl FromStr for ExternalService {
    type Err = DeserializationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ExternalService::deserialize(s)
    }
}

impl Serialize for ExternalService {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(ExternalService::serialize(self))
    }
}

impl<'de> Deserialize<'de> for ExternalService {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ExternalService::deserialize(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        assert_eq!(ExternalService::Etherscan.code(), 0);
        assert_eq!(ExternalService::Covalent.code(), 5);
    }

    #[test]
    fn test_deserialize_any_case() {
        assert_eq!(ExternalService::deserialize("ETHERSCAN").unwrap(), ExternalService::Etherscan);
        assert_eq!(ExternalService::deserialize("OpenSea").unwrap(), ExternalService::Opensea);
        assert!(ExternalService::deserialize("coingecko").is_err());
    }

    #[test]
    fn test_serde_round_trip() {
        for service in ExternalService::ALL {
            let json = serde_json::to_string(&service).unwrap();
            let back: ExternalService = serde_json::from_str(&json).unwrap();
            assert_eq!(back, service);
        }
    }
}
