//! Lenient decimal coercion for amount-like record fields.
//!
//! Spreadsheet-style rows carry money as numbers, numeric strings, blanks or
//! outright garbage. One bad row must not block the rest of the ledger, so
//! anything that does not parse becomes zero.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde_json::Value;

/// Parses a textual amount, accepting `,` thousands separators and
/// scientific notation.
pub fn parse_amount(raw: &str) -> Option<Decimal> {
    let cleaned: String = raw.trim().chars().filter(|c| *c != ',').collect();
    if cleaned.is_empty() {
        return None;
    }
    Decimal::from_str(&cleaned)
        .or_else(|_| Decimal::from_scientific(&cleaned))
        .ok()
}

/// Converts a raw JSON cell into a decimal, or `None` when it is not numeric.
pub fn coerce(value: &Value) -> Option<Decimal> {
    match value {
        Value::Number(number) => parse_amount(&number.to_string()),
        Value::String(text) => parse_amount(text),
        _ => None,
    }
}

/// Serde adapter used with `#[serde(with = "...")]` on amount fields.
pub mod lenient {
    use rust_decimal::Decimal;
    use serde::{Deserialize, Deserializer, Serializer};
    use serde_json::Value;

    pub fn serialize<S>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        rust_decimal::serde::float::serialize(value, serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(super::coerce(&value).unwrap_or_else(|| {
            tracing::warn!(raw = %value, "malformed amount coerced to zero");
            Decimal::ZERO
        }))
    }
}
