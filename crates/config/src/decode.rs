// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::ConfigError;

/// Response formats the decoder understands.
pub const VALID_SOURCES: [&str; 3] = ["etherscan", "etherscan-internal", "covalent"];

#[derive(Debug, Clone)]
pub struct DecodeConfig {
    /// Response format assumed when `--source` is not given
    ///
    /// Env: PI_DECODE_DEFAULT_SOURCE
    /// Valid values: etherscan, etherscan-internal, covalent
    /// Default: etherscan
    pub default_source: String,

    /// Log and skip records that fail to deserialize instead of aborting
    ///
    /// Env: PI_DECODE_SKIP_INVALID
    /// Default: false
    pub skip_invalid: bool,

    /// Pretty-print the output JSON
    ///
    /// Env: PI_DECODE_PRETTY
    /// Default: false
    pub pretty: bool,
}

pub(crate) fn default_source() -> String {
    "etherscan".to_string()
}

impl DecodeConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if !VALID_SOURCES.contains(&self.default_source.as_str()) {
            return Err(ConfigError::ValidateError(format!(
                "Invalid source '{}'. Must be one of: {}",
                self.default_source,
                VALID_SOURCES.join(", ")
            )));
        }
        Ok(())
    }
}

impl Default for DecodeConfig {
    fn default() -> Self {
        Self {
            default_source: default_source(),
            skip_invalid: false,
            pretty: false,
        }
    }
}
