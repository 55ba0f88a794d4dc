// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Conversion of raw API entries into typed records.

pub mod deserialize;

pub use deserialize::{
    deserialize_covalent_transaction, deserialize_ethereum_transaction, deserialize_timestamp,
    deserialize_timestamp_from_iso,
};
