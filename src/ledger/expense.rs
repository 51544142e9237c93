use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{amount, date};

/// A project cost paid out of a member's own pocket. Append-only.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Expense {
    #[serde(rename = "Date", default, with = "date::lenient")]
    pub date: Option<NaiveDate>,
    #[serde(rename = "Project", default)]
    pub project: String,
    #[serde(rename = "Paid By", default)]
    pub paid_by: String,
    #[serde(rename = "Description", default)]
    pub description: String,
    #[serde(rename = "Amount", default, with = "amount::lenient")]
    pub amount: Decimal,
    #[serde(rename = "Notes", default)]
    pub notes: String,
}

impl Expense {
    pub fn new(
        date: NaiveDate,
        project: impl Into<String>,
        paid_by: impl Into<String>,
        description: impl Into<String>,
        amount: Decimal,
    ) -> Self {
        Self {
            date: Some(date),
            project: project.into(),
            paid_by: paid_by.into(),
            description: description.into(),
            amount,
            notes: String::new(),
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }
}
