// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Helpers shared by every external API response reader.

pub mod utils;

pub use utils::{DEFAULT_API, read_hash, read_integer};
