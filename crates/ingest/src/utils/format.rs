//! Formatting utilities for hex encoding and API-facing integers.

use num_bigint::BigInt;
use serde_json::Value;

/// Largest integer a JavaScript consumer can hold without losing precision (2^53 - 1).
pub const MAX_SAFE_INTEGER: i64 = 9_007_199_254_740_991;

/// Format bytes as hex string with "0x" prefix
pub fn hex_with_prefix(data: &[u8]) -> String {
    format!("0x{}", hex::encode(data))
}

/// JSON number while it fits the safe range, decimal string beyond it.
pub fn serialize_integer(value: &BigInt) -> Value {
    match i64::try_from(value) {
        Ok(n) if (-MAX_SAFE_INTEGER..=MAX_SAFE_INTEGER).contains(&n) => Value::from(n),
        _ => Value::String(value.to_string()),
    }
}

/// `SETTLEMENT_BUY` -> `settlement buy`
pub fn constant_to_display(name: &str) -> String {
    name.to_lowercase().replace('_', " ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_hex_with_prefix() {
        assert_eq!(hex_with_prefix(b"123"), "0x313233");
        assert_eq!(hex_with_prefix(&[]), "0x");
    }

    #[test]
    fn test_serialize_integer_bounds() {
        assert_eq!(serialize_integer(&BigInt::from(21000)), json!(21000));
        assert_eq!(serialize_integer(&BigInt::from(-5)), json!(-5));
        assert_eq!(
            serialize_integer(&BigInt::from(MAX_SAFE_INTEGER)),
            json!(9_007_199_254_740_991i64)
        );
        assert_eq!(
            serialize_integer(&(BigInt::from(MAX_SAFE_INTEGER) + 1)),
            json!("9007199254740992")
        );
        assert_eq!(
            serialize_integer(&BigInt::from(1_000_000_000_000_000_000u64)),
            json!("1000000000000000000")
        );
    }

    #[test]
    fn test_constant_to_display() {
        assert_eq!(constant_to_display("SETTLEMENT_BUY"), "settlement buy");
        assert_eq!(constant_to_display("COINBASEPRO"), "coinbasepro");
    }
}
