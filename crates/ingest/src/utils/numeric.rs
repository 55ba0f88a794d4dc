// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integer coercion for loosely typed API values.
//!
//! Providers return the same quantity as a JSON number, a decimal string or a
//! `0x` hex string depending on the endpoint. Everything is normalized to a
//! signed [`BigInt`] so no value is ever truncated.

use crate::errors::ConversionError;
use crate::types::value::FieldValue;
use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use num_traits::{FromPrimitive, Num, Zero};
use serde_json::{Number, Value};
use std::str::FromStr;

/// Bound on the decimal exponent of scientific literals. A uint256 has 78
/// decimal digits, so anything past this cannot be a real on-chain quantity.
pub const MAX_DECIMAL_EXPONENT: u32 = 80;

/// Convert an integer-like value to a [`BigInt`].
///
/// Accepts JSON integers, integral JSON floats (`12.0`), decimal strings with
/// optional sign, `0x` hex strings and exactly integral decimal or scientific
/// literals (`"12.0"`, `"1e18"`). Anything else is a [`ConversionError`].
pub fn convert_to_int(value: FieldValue<'_>) -> Result<BigInt, ConversionError> {
    if let Some(s) = value.as_str() {
        return convert_str_to_int(s).ok_or_else(|| ConversionError::new(s, "string"));
    }

    match value {
        FieldValue::Json(Value::Number(n)) => {
            convert_number_to_int(n).ok_or_else(|| ConversionError::new(n.to_string(), "float"))
        }
        other => Err(ConversionError::new(other.to_string(), other.kind())),
    }
}

fn convert_number_to_int(n: &Number) -> Option<BigInt> {
    if let Some(i) = n.as_i64() {
        return Some(BigInt::from(i));
    }
    if let Some(u) = n.as_u64() {
        return Some(BigInt::from(u));
    }
    let f = n.as_f64()?;
    if f.is_finite() && f.fract() == 0.0 {
        BigInt::from_f64(f)
    } else {
        None
    }
}

fn convert_str_to_int(s: &str) -> Option<BigInt> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    let (negative, unsigned) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };
    if let Some(digits) = unsigned
        .strip_prefix("0x")
        .or_else(|| unsigned.strip_prefix("0X"))
    {
        if digits.is_empty() || digits.starts_with(['+', '-']) {
            return None;
        }
        let parsed = BigInt::from_str_radix(digits, 16).ok()?;
        return Some(if negative { -parsed } else { parsed });
    }

    if let Ok(parsed) = BigInt::from_str(s) {
        return Some(parsed);
    }

    exact_decimal_to_int(s)
}

/// `"12.000"` and `"1.5e3"` are integers, `"12.5"` is not.
///
/// Exponents beyond [`MAX_DECIMAL_EXPONENT`] are rejected before scaling.
fn exact_decimal_to_int(s: &str) -> Option<BigInt> {
    let decimal = BigDecimal::from_str(s).ok()?;
    let (digits, scale) = decimal.as_bigint_and_exponent();
    let magnitude = u32::try_from(scale.unsigned_abs()).ok()?;
    if magnitude > MAX_DECIMAL_EXPONENT {
        return None;
    }
    if scale <= 0 {
        return Some(digits * BigInt::from(10u8).pow(magnitude));
    }

    let divisor = BigInt::from(10u8).pow(magnitude);
    if (&digits % &divisor).is_zero() {
        Some(digits / divisor)
    } else {
        None
    }
}
