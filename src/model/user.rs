use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
}

impl User {
    pub fn new(
        id: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    /// First and last name joined by a single space.
    pub fn full_name(&self) -> String {
        format_full_name(&self.first_name, &self.last_name)
    }
}

pub(crate) fn format_full_name(first_name: &str, last_name: &str) -> String {
    format!("{first_name} {last_name}")
}
