use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::amount;

/// A tracked engagement with a fixed budget and a team roster.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Project {
    #[serde(rename = "Project Name")]
    pub name: String,
    #[serde(rename = "Budget", default, with = "amount::lenient")]
    pub budget: Decimal,
    #[serde(rename = "Status", default)]
    pub status: ProjectStatus,
    #[serde(rename = "Team Members", default, with = "team_field")]
    pub team: Vec<String>,
}

impl Project {
    pub fn new<I, S>(name: impl Into<String>, budget: Decimal, team: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut roster = Vec::new();
        for member in team {
            push_member(&mut roster, member.as_ref());
        }
        Self {
            name: name.into(),
            budget,
            status: ProjectStatus::Active,
            team: roster,
        }
    }

    pub fn with_status(mut self, status: ProjectStatus) -> Self {
        self.status = status;
        self
    }

    pub fn has_member(&self, member: &str) -> bool {
        self.team.iter().any(|name| name == member)
    }
}

/// Splits a comma separated roster into trimmed, non-empty, de-duplicated
/// names, keeping first-seen order.
pub fn parse_team(raw: &str) -> Vec<String> {
    let mut team = Vec::new();
    for name in raw.split(',') {
        push_member(&mut team, name);
    }
    team
}

fn push_member(roster: &mut Vec<String>, raw: &str) {
    let name = raw.trim();
    if !name.is_empty() && !roster.iter().any(|existing| existing == name) {
        roster.push(name.to_string());
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ProjectStatus {
    #[default]
    Active,
    Other(String),
}

impl From<String> for ProjectStatus {
    fn from(raw: String) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("active") {
            ProjectStatus::Active
        } else {
            ProjectStatus::Other(trimmed.to_string())
        }
    }
}

impl From<ProjectStatus> for String {
    fn from(status: ProjectStatus) -> Self {
        status.to_string()
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProjectStatus::Active => f.write_str("Active"),
            ProjectStatus::Other(label) => f.write_str(label),
        }
    }
}

mod team_field {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(team: &[String], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&team.join(", "))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.as_deref().map(super::parse_team).unwrap_or_default())
    }
}
