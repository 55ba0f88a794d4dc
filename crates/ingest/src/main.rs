// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use anyhow::Context;
use config::{Args, IngestConfig};
use portfolio_ingest::logging::{self, LoggingConfig};
use portfolio_ingest::{ApiSource, ErrorPolicy, decode_response};
use serde_json::Value;
use std::io::{Read, Write};
use std::path::Path;

fn read_input(input: &str) -> anyhow::Result<Value> {
    let raw = if input == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read response from stdin")?;
        buf
    } else {
        std::fs::read_to_string(input).with_context(|| format!("Failed to read {}", input))?
    };
    serde_json::from_str(&raw).with_context(|| format!("{} is not valid JSON", input))
}

fn write_output(output: Option<&Path>, value: &Value, pretty: bool) -> anyhow::Result<()> {
    let mut rendered = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    rendered.push('\n');

    match output {
        Some(path) => std::fs::write(path, rendered)
            .with_context(|| format!("Failed to write {}", path.display()))?,
        None => std::io::stdout().lock().write_all(rendered.as_bytes())?,
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse_args();
    let env_file_loaded = args.load_env_file()?;

    let mut config = IngestConfig::from_env()?;
    config.apply_args(&args)?;

    let _log_guard = logging::init_with_config(LoggingConfig::from(&config.log))?;
    if env_file_loaded {
        tracing::debug!("Loaded environment from {}", args.env_file);
    }

    let source: ApiSource = config.decode.default_source.parse()?;
    let policy = ErrorPolicy::from_skip_invalid(config.decode.skip_invalid);
    tracing::info!("Decoding {} response from {}", source, args.input);

    let response = read_input(&args.input)?;
    let batch = decode_response(source, &response, policy)?;
    write_output(args.output.as_deref(), &batch.serialize(), config.decode.pretty)?;

    tracing::info!(
        decoded = batch.len(),
        skipped = batch.skipped,
        "Decoded {} transactions, skipped {}",
        batch.len(),
        batch.skipped
    );

    Ok(())
}
