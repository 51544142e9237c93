use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::amount;

/// Percentage of a project's profit allotted to one member.
///
/// Rows are never de-duplicated in storage; readers apply the latest row for
/// a given member.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProfitSplit {
    #[serde(rename = "Project", default)]
    pub project: String,
    #[serde(rename = "Member", default)]
    pub member: String,
    #[serde(rename = "Percentage", default, with = "amount::lenient")]
    pub percentage: Decimal,
    #[serde(rename = "Notes", default)]
    pub notes: String,
}

impl ProfitSplit {
    pub fn new(project: impl Into<String>, member: impl Into<String>, percentage: Decimal) -> Self {
        Self {
            project: project.into(),
            member: member.into(),
            percentage,
            notes: String::new(),
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }
}
