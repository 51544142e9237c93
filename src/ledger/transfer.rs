use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{amount, date};

/// Source value marking money paid in by the client rather than a member.
pub const CLIENT_SENTINEL: &str = "Client";

/// Money handed to a member, stored in the `Reimbursements` table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transfer {
    #[serde(rename = "Date", default, with = "date::lenient")]
    pub date: Option<NaiveDate>,
    #[serde(rename = "Project", default)]
    pub project: String,
    #[serde(rename = "From", default)]
    pub from: TransferSource,
    #[serde(rename = "To", default)]
    pub to: String,
    #[serde(rename = "Amount", default, with = "amount::lenient")]
    pub amount: Decimal,
    #[serde(rename = "Notes", default)]
    pub notes: String,
}

impl Transfer {
    pub fn new(
        date: NaiveDate,
        project: impl Into<String>,
        from: TransferSource,
        to: impl Into<String>,
        amount: Decimal,
    ) -> Self {
        Self {
            date: Some(date),
            project: project.into(),
            from,
            to: to.into(),
            amount,
            notes: String::new(),
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TransferSource {
    Client,
    Member(String),
}

impl TransferSource {
    pub fn member(name: impl Into<String>) -> Self {
        Self::from(name.into())
    }

    pub fn member_name(&self) -> Option<&str> {
        match self {
            TransferSource::Client => None,
            TransferSource::Member(name) => Some(name.as_str()),
        }
    }
}

// A missing `From` cell reads as an unnamed member, never as the client.
impl Default for TransferSource {
    fn default() -> Self {
        TransferSource::Member(String::new())
    }
}

impl From<String> for TransferSource {
    fn from(raw: String) -> Self {
        let trimmed = raw.trim();
        if trimmed == CLIENT_SENTINEL {
            TransferSource::Client
        } else {
            TransferSource::Member(trimmed.to_string())
        }
    }
}

impl From<TransferSource> for String {
    fn from(source: TransferSource) -> Self {
        source.to_string()
    }
}

impl fmt::Display for TransferSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransferSource::Client => f.write_str(CLIENT_SENTINEL),
            TransferSource::Member(name) => f.write_str(name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn client_sentinel_is_recognised() {
        let row = json!({
            "Date": "2024-03-02",
            "Project": "Kiosk",
            "From": "Client",
            "To": "A",
            "Amount": 1000
        });
        let transfer: Transfer = serde_json::from_value(row).expect("transfer row");
        assert_eq!(transfer.from, TransferSource::Client);
        assert_eq!(transfer.from.member_name(), None);
    }

    #[test]
    fn sentinel_match_is_case_sensitive() {
        assert_eq!(
            TransferSource::member("client"),
            TransferSource::Member("client".into())
        );
        assert_eq!(TransferSource::member("Client"), TransferSource::Client);
    }

    #[test]
    fn blank_cells_still_load() {
        let row = json!({ "Date": null, "Project": "Kiosk", "To": "B", "Amount": "5" });
        let transfer: Transfer = serde_json::from_value(row).expect("transfer row");
        assert_eq!(transfer.date, None);
        assert_eq!(transfer.from, TransferSource::Member(String::new()));
        assert_eq!(transfer.amount, Decimal::from(5));
    }
}
