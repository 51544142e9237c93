use std::fmt;

use serde::{Deserialize, Serialize};

/// A login row from the `Users` table.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    #[serde(rename = "Username")]
    pub username: String,
    #[serde(rename = "Password", default, with = "cell_text")]
    pub password: String,
}

impl User {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn password_matches(&self, candidate: &str) -> bool {
        self.password == candidate
    }
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

// Sheet exports turn all-digit passwords into numbers.
mod cell_text {
    use serde::{Deserialize, Deserializer, Serializer};
    use serde_json::Value;

    pub fn serialize<S>(value: &str, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(value)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Value::deserialize(deserializer)? {
            Value::String(text) => text,
            Value::Null => String::new(),
            other => other.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn numeric_password_cell_reads_as_text() {
        let user: User = serde_json::from_value(json!({ "Username": "Essam", "Password": 1234 }))
            .expect("user row");
        assert!(user.password_matches("1234"));
    }

    #[test]
    fn debug_output_hides_password() {
        let user = User::new("Essam", "secret");
        assert!(!format!("{user:?}").contains("secret"));
    }
}
