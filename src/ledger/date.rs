//! Lenient date cells. Dates are informational only, so a cell that does
//! not read as `YYYY-MM-DD` loads as `None` instead of rejecting the row.

use chrono::NaiveDate;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses `2024-03-01`, also accepting a trailing time part as sheet exports
/// write it (`2024-03-01 00:00:00`, `2024-03-01T09:30:00`).
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let day = raw.trim().split(|c| c == ' ' || c == 'T').next()?;
    NaiveDate::parse_from_str(day, DATE_FORMAT).ok()
}

pub mod lenient {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};
    use serde_json::Value;

    pub fn serialize<S>(value: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(date) => serializer.collect_str(&date.format(super::DATE_FORMAT)),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        let parsed = match &value {
            Value::Null => return Ok(None),
            Value::String(text) if text.trim().is_empty() => return Ok(None),
            Value::String(text) => super::parse_date(text),
            _ => None,
        };
        if parsed.is_none() {
            tracing::warn!(raw = %value, "unreadable date left blank");
        }
        Ok(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_and_timestamped_days() {
        let expected = NaiveDate::from_ymd_opt(2024, 3, 1);
        assert_eq!(parse_date("2024-03-01"), expected);
        assert_eq!(parse_date(" 2024-03-01 00:00:00"), expected);
        assert_eq!(parse_date("2024-03-01T09:30:00"), expected);
    }

    #[test]
    fn other_layouts_are_rejected() {
        assert_eq!(parse_date("01/03/2024"), None);
        assert_eq!(parse_date("2024-13-01"), None);
        assert_eq!(parse_date(""), None);
    }
}
