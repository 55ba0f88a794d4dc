// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error types of the deserialization layer.

use std::error::Error as StdError;
use thiserror::Error;

type BoxedCause = Box<dyn StdError + Send + Sync + 'static>;

/// An external, untrusted value could not be turned into the required domain type.
///
/// When it wraps a lower-level failure the original error is kept as the
/// [`source`](std::error::Error::source) so callers can walk the whole chain.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct DeserializationError {
    message: String,
    #[source]
    source: Option<BoxedCause>,
}

impl DeserializationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    pub fn with_source<E>(message: impl Into<String>, source: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Messages of this error and every cause below it, outermost first.
    pub fn chain(&self) -> Vec<String> {
        let mut messages = vec![self.message.clone()];
        let mut current = self.source();
        while let Some(cause) = current {
            messages.push(cause.to_string());
            current = cause.source();
        }
        messages
    }
}

/// Raised by [`convert_to_int`](crate::utils::numeric::convert_to_int).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Can not convert {value} which is of type {kind} to int.")]
pub struct ConversionError {
    pub value: String,
    pub kind: &'static str,
}

impl ConversionError {
    pub fn new(value: impl Into<String>, kind: &'static str) -> Self {
        Self {
            value: value.into(),
            kind,
        }
    }
}

/// Errors from decoding a whole API response.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error(transparent)]
    Deserialization(#[from] DeserializationError),

    #[error("{api} returned an error: {message}")]
    RemoteError { api: &'static str, message: String },

    #[error("Unexpected {api} response: {reason}")]
    UnexpectedResponse { api: &'static str, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialization_error_without_source() {
        let err = DeserializationError::new("missing key hash");
        assert_eq!(err.to_string(), "missing key hash");
        assert!(err.source().is_none());
        assert_eq!(err.chain(), vec!["missing key hash".to_string()]);
    }

    #[test]
    fn test_deserialization_error_keeps_cause_chain() {
        let inner = DeserializationError::with_source(
            "Failed to turn 0xzz to bytes",
            hex::FromHexError::OddLength,
        );
        let outer = DeserializationError::with_source("Failed to read hash", inner);

        let chain = outer.chain();
        assert_eq!(chain.len(), 3);
        assert_eq!(chain[0], "Failed to read hash");
        assert_eq!(chain[1], "Failed to turn 0xzz to bytes");
        assert_eq!(chain[2], hex::FromHexError::OddLength.to_string());
    }

    #[test]
    fn test_conversion_error_display() {
        let err = ConversionError::new("abc", "string");
        assert_eq!(err.to_string(), "Can not convert abc which is of type string to int.");
    }

    #[test]
    fn test_ingest_error_is_transparent_for_deserialization() {
        let err: IngestError = DeserializationError::new("bad nonce").into();
        assert_eq!(err.to_string(), "bad nonce");
    }
}
