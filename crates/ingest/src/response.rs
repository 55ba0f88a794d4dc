// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Decoding of whole saved API responses.
//!
//! Each provider wraps its transaction list in its own envelope. The envelope
//! is checked first, then every entry is decoded with the matching
//! deserializer.

use crate::errors::{DeserializationError, IngestError};
use crate::serialization::deserialize::{
    COVALENT_API, deserialize_covalent_transaction, deserialize_ethereum_transaction,
};
use crate::types::transactions::TransactionRecord;
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

const ETHERSCAN_API: &str = "etherscan";
const ETHERSCAN_NO_TRANSACTIONS: &str = "No transactions found";

/// Which provider and endpoint produced a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiSource {
    /// Etherscan `account/txlist`.
    Etherscan,
    /// Etherscan `account/txlistinternal`.
    EtherscanInternal,
    /// Covalent `transactions_v2`.
    Covalent,
}

impl ApiSource {
    pub fn name(&self) -> &'static str {
        match self {
            ApiSource::Etherscan => "etherscan",
            ApiSource::EtherscanInternal => "etherscan-internal",
            ApiSource::Covalent => "covalent",
        }
    }

    /// Provider name used in error messages.
    pub fn api(&self) -> &'static str {
        match self {
            ApiSource::Etherscan | ApiSource::EtherscanInternal => ETHERSCAN_API,
            ApiSource::Covalent => COVALENT_API,
        }
    }
}

impl FromStr for ApiSource {
    type Err = DeserializationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "etherscan" => Ok(ApiSource::Etherscan),
            "etherscan-internal" => Ok(ApiSource::EtherscanInternal),
            "covalent" => Ok(ApiSource::Covalent),
            other => Err(DeserializationError::new(format!("Unknown API source {}", other))),
        }
    }
}

impl fmt::Display for ApiSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What to do with an entry that fails to decode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ErrorPolicy {
    /// Fail the whole response on the first bad entry.
    #[default]
    Abort,
    /// Log the entry, count it and carry on.
    Skip,
}

impl ErrorPolicy {
    pub fn from_skip_invalid(skip_invalid: bool) -> Self {
        if skip_invalid {
            ErrorPolicy::Skip
        } else {
            ErrorPolicy::Abort
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct DecodedBatch {
    pub transactions: Vec<TransactionRecord>,
    /// Entries dropped under [`ErrorPolicy::Skip`].
    pub skipped: usize,
}

impl DecodedBatch {
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// JSON array of the serialized records, in input order.
    pub fn serialize(&self) -> Value {
        Value::Array(self.transactions.iter().map(TransactionRecord::serialize).collect())
    }
}

/// Decode a saved `source` response into transaction records.
pub fn decode_response(
    source: ApiSource,
    response: &Value,
    policy: ErrorPolicy,
) -> Result<DecodedBatch, IngestError> {
    match source {
        ApiSource::Etherscan | ApiSource::EtherscanInternal => {
            let internal = source == ApiSource::EtherscanInternal;
            match etherscan_entries(response)? {
                Some(entries) => decode_entries(source, entries, policy, |entry| {
                    deserialize_ethereum_transaction(entry, internal, ETHERSCAN_API)
                        .map(TransactionRecord::from)
                }),
                None => Ok(DecodedBatch::default()),
            }
        }
        ApiSource::Covalent => {
            let items = covalent_items(response)?;
            decode_entries(source, items, policy, |item| {
                deserialize_covalent_transaction(item).map(TransactionRecord::from)
            })
        }
    }
}

/// `None` when Etherscan reports that there is nothing to return.
fn etherscan_entries(response: &Value) -> Result<Option<&[Value]>, IngestError> {
    let status = response.get("status").and_then(Value::as_str).ok_or_else(|| {
        IngestError::UnexpectedResponse {
            api: ETHERSCAN_API,
            reason: "missing status field".to_string(),
        }
    })?;
    let result = response.get("result").unwrap_or(&Value::Null);

    match status {
        "1" => result
            .as_array()
            .map(|entries| Some(entries.as_slice()))
            .ok_or_else(|| IngestError::UnexpectedResponse {
                api: ETHERSCAN_API,
                reason: "result is not a list".to_string(),
            }),
        "0" => {
            let message = response.get("message").and_then(Value::as_str).unwrap_or_default();
            if message == ETHERSCAN_NO_TRANSACTIONS {
                return Ok(None);
            }
            let detail = match result {
                Value::String(s) => s.clone(),
                Value::Null => message.to_string(),
                other => other.to_string(),
            };
            Err(IngestError::RemoteError {
                api: ETHERSCAN_API,
                message: detail,
            })
        }
        other => Err(IngestError::UnexpectedResponse {
            api: ETHERSCAN_API,
            reason: format!("unknown status {}", other),
        }),
    }
}

fn covalent_items(response: &Value) -> Result<&[Value], IngestError> {
    if response.get("error").and_then(Value::as_bool).unwrap_or(false) {
        let message = response
            .get("error_message")
            .and_then(Value::as_str)
            .unwrap_or("unknown error");
        return Err(IngestError::RemoteError {
            api: COVALENT_API,
            message: message.to_string(),
        });
    }

    response
        .pointer("/data/items")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .ok_or_else(|| IngestError::UnexpectedResponse {
            api: COVALENT_API,
            reason: "missing data.items list".to_string(),
        })
}

fn decode_entries<F>(
    source: ApiSource,
    entries: &[Value],
    policy: ErrorPolicy,
    decode: F,
) -> Result<DecodedBatch, IngestError>
where
    F: Fn(&Value) -> Result<TransactionRecord, DeserializationError>,
{
    let mut batch = DecodedBatch {
        transactions: Vec::with_capacity(entries.len()),
        skipped: 0,
    };

    for (index, entry) in entries.iter().enumerate() {
        match decode(entry) {
            Ok(record) => batch.transactions.push(record),
            Err(e) if policy == ErrorPolicy::Skip => {
                tracing::warn!(
                    source = %source,
                    index,
                    error = ?e.chain(),
                    "Skipping {} entry that failed to decode: {}",
                    source,
                    e
                );
                batch.skipped += 1;
            }
            Err(e) => return Err(e.into()),
        }
    }

    tracing::debug!(
        "Decoded {} {} entries, skipped {}",
        batch.len(),
        source,
        batch.skipped
    );
    Ok(batch)
}
