// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::types::address::BlockchainAddress;
use crate::types::location::Location;
use crate::types::primitives::{ApiKey, ApiSecret};
use crate::types::service::ExternalService;
use serde::{Deserialize, Serialize};

/// Key for one of the external data services.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalServiceApiCredentials {
    pub service: ExternalService,
    pub api_key: ApiKey,
}

impl ExternalServiceApiCredentials {
    pub fn new(service: ExternalService, api_key: ApiKey) -> Self {
        Self { service, api_key }
    }

    /// `(service name, api key)` row.
    pub fn serialize_for_db(&self) -> (String, String) {
        (
            self.service.serialize().to_string(),
            self.api_key.as_str().to_string(),
        )
    }
}

/// Credentials of one exchange account.
///
/// `name` distinguishes several accounts on the same location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangeApiCredentials {
    pub name: String,
    pub location: Location,
    pub api_key: ApiKey,
    pub api_secret: ApiSecret,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passphrase: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlockchainAccountData {
    pub address: BlockchainAddress,
    pub label: Option<String>,
    pub tags: Option<Vec<String>>,
}

impl BlockchainAccountData {
    pub fn new(address: BlockchainAddress) -> Self {
        Self {
            address,
            label: None,
            tags: None,
        }
    }
}
