// The identity data rendered on the card and exported as a contact file.

use serde::{Deserialize, Serialize};

/// Contact record. Everything except the first name is optional; empty
/// strings are treated as absent by the serializer.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Contact {
    pub first_name: String,
    pub last_name: Option<String>,
    pub organization: Option<String>,
    pub title: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub address: Option<String>,
    pub note: Option<String>,
}

impl Contact {
    /// "first last" with missing parts dropped.
    pub fn full_name(&self) -> String {
        let last = self.last_name.as_deref().unwrap_or("");
        format!("{} {}", self.first_name, last).trim().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_name_trims_missing_parts() {
        let solo = Contact {
            first_name: "Jane".into(),
            ..Default::default()
        };
        assert_eq!(solo.full_name(), "Jane");

        let both = Contact {
            first_name: "Jane".into(),
            last_name: Some("Doe".into()),
            ..Default::default()
        };
        assert_eq!(both.full_name(), "Jane Doe");
    }
}
