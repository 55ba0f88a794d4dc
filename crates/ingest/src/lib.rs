// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

pub mod errors;
pub mod externalapis;
pub mod logging;
pub mod response;
pub mod serialization;
pub mod types;
pub mod utils;

pub use errors::{ConversionError, DeserializationError, IngestError};
pub use response::{ApiSource, DecodedBatch, ErrorPolicy, decode_response};
