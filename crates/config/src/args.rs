// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::ConfigError;
use clap::Parser;
use std::path::{Path, PathBuf};

const DEFAULT_ENV_FILE: &str = ".env";

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to .env file (e.g., .env.mainnet)
    #[arg(short, long, default_value = DEFAULT_ENV_FILE)]
    pub env_file: String,

    /// Response format: etherscan, etherscan-internal or covalent
    #[arg(short, long)]
    pub source: Option<String>,

    /// Skip records that fail to deserialize instead of aborting
    #[arg(long)]
    pub skip_invalid: bool,

    /// Pretty-print the output JSON
    #[arg(long)]
    pub pretty: bool,

    /// Write output here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Saved API response to decode, `-` reads stdin
    #[arg(default_value = "-")]
    pub input: String,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Load the env file into the process environment.
    ///
    /// A missing default `.env` is fine, a missing explicitly named file is not.
    /// Returns whether a file was loaded.
    pub fn load_env_file(&self) -> Result<bool, ConfigError> {
        let path = Path::new(&self.env_file);
        if !path.exists() && self.env_file == DEFAULT_ENV_FILE {
            return Ok(false);
        }

        dotenv::from_path(path).map_err(|source| ConfigError::EnvFileError {
            path: self.env_file.clone(),
            source,
        })?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;

    #[test]
    fn test_parse_defaults() {
        let args = Args::try_parse_from(["portfolio-ingest"]).unwrap();
        assert_eq!(args.env_file, ".env");
        assert_eq!(args.input, "-");
        assert!(args.source.is_none());
        assert!(!args.skip_invalid);
    }

    #[test]
    fn test_parse_all_flags() {
        let args = Args::try_parse_from([
            "portfolio-ingest",
            "--source",
            "covalent",
            "--skip-invalid",
            "--pretty",
            "-o",
            "out.json",
            "response.json",
        ])
        .unwrap();
        assert_eq!(args.source.as_deref(), Some("covalent"));
        assert!(args.skip_invalid);
        assert!(args.pretty);
        assert_eq!(args.output, Some(PathBuf::from("out.json")));
        assert_eq!(args.input, "response.json");
    }

    #[test]
    fn test_missing_explicit_env_file_is_error() {
        let args = Args::try_parse_from(["portfolio-ingest", "-e", "/nonexistent/.env.test"]).unwrap();
        assert!(matches!(
            args.load_env_file(),
            Err(ConfigError::EnvFileError { .. })
        ));
    }

    #[test]
    #[serial]
    fn test_load_env_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "PI_TEST_ARGS_MARKER=loaded").unwrap();

        let args = Args::try_parse_from([
            "portfolio-ingest",
            "--env-file",
            file.path().to_str().unwrap(),
        ])
        .unwrap();

        assert!(args.load_env_file().unwrap());
        assert_eq!(std::env::var("PI_TEST_ARGS_MARKER").unwrap(), "loaded");
        // SAFETY: serialized with every other test touching the environment.
        unsafe { std::env::remove_var("PI_TEST_ARGS_MARKER") };
    }
}
