// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

mod args;
mod decode;
mod error;
mod log;

pub use args::Args;
pub use decode::{DecodeConfig, VALID_SOURCES};
pub use error::ConfigError;
pub use log::LogConfig;

use serde::Deserialize;

/// Environment variable prefix shared by every setting.
pub const ENV_PREFIX: &str = "PI_";

/// Flat view of the environment, as envy sees it.
///
/// `PI_LOG_LEVEL` lands in `log_level`, `PI_DECODE_SKIP_INVALID` in
/// `decode_skip_invalid`, and so on.
#[derive(Debug, Deserialize)]
struct EnvVars {
    #[serde(default = "log::default_level")]
    log_level: String,
    #[serde(default)]
    log_json: bool,
    #[serde(default)]
    log_strip_ansi: bool,
    #[serde(default)]
    log_write: bool,
    #[serde(default = "log::default_write_path")]
    log_write_path: String,
    #[serde(default = "log::default_write_max_file_size")]
    log_write_max_file_size: u64,
    #[serde(default = "log::default_write_max_files")]
    log_write_max_files: usize,

    #[serde(default = "decode::default_source")]
    decode_default_source: String,
    #[serde(default)]
    decode_skip_invalid: bool,
    #[serde(default)]
    decode_pretty: bool,
}

impl From<EnvVars> for IngestConfig {
    fn from(vars: EnvVars) -> Self {
        Self {
            log: LogConfig {
                level: vars.log_level,
                json: vars.log_json,
                strip_ansi: vars.log_strip_ansi,
                write: vars.log_write,
                write_path: vars.log_write_path,
                write_max_file_size: vars.log_write_max_file_size,
                write_max_files: vars.log_write_max_files,
            },
            decode: DecodeConfig {
                default_source: vars.decode_default_source,
                skip_invalid: vars.decode_skip_invalid,
                pretty: vars.decode_pretty,
            },
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct IngestConfig {
    pub log: LogConfig,
    pub decode: DecodeConfig,
}

impl IngestConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let vars = envy::prefixed(ENV_PREFIX).from_env::<EnvVars>()?;
        let config = Self::from(vars);
        config.validate()?;
        Ok(config)
    }

    /// Same as [`IngestConfig::from_env`] but reads from an explicit list of
    /// `(KEY, value)` pairs instead of the process environment.
    pub fn from_vars<I>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let vars = envy::prefixed(ENV_PREFIX).from_iter::<_, EnvVars>(vars)?;
        let config = Self::from(vars);
        config.validate()?;
        Ok(config)
    }

    /// Command line flags win over the environment.
    pub fn apply_args(&mut self, args: &Args) -> Result<(), ConfigError> {
        if let Some(source) = &args.source {
            self.decode.default_source = source.clone();
        }
        if args.skip_invalid {
            self.decode.skip_invalid = true;
        }
        if args.pretty {
            self.decode.pretty = true;
        }
        self.validate()
    }

    fn validate(&self) -> Result<(), ConfigError> {
        self.log.validate()?;
        self.decode.validate()?;
        Ok(())
    }
}
