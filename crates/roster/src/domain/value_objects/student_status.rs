//! StudentStatus - Notification eligibility of a student

use serde::{Deserialize, Serialize};

/// Student status. The only transition is `Active` -> `Suspend`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum StudentStatus {
    #[default]
    Active,
    Suspend,
}

impl StudentStatus {
    /// Text stored in the `students.status` column
    pub fn as_str(&self) -> &'static str {
        match self {
            StudentStatus::Active => "active",
            StudentStatus::Suspend => "suspend",
        }
    }
}

impl std::fmt::Display for StudentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for StudentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(StudentStatus::Active),
            "suspend" => Ok(StudentStatus::Suspend),
            _ => Err(format!("Unknown student status: {}", s)),
        }
    }
}
