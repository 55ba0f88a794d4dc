// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

pub mod format;
pub mod hexbytes;
pub mod numeric;

pub use format::{hex_with_prefix, serialize_integer};
pub use hexbytes::{HexBytes, bytes_from_value, hexstring_to_bytes};
pub use numeric::convert_to_int;
