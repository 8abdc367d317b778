//! Roster request/response DTOs
//!
//! Request fields are optional so that absent parameters can be reported
//! by name instead of failing deserialization.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One teacher email or a list of them
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum TeacherSelector {
    One(String),
    Many(Vec<String>),
}

impl TeacherSelector {
    /// `None` for an empty single email, which counts as not given
    pub fn present(self) -> Option<Self> {
        match self {
            TeacherSelector::One(email) if email.is_empty() => None,
            selector => Some(selector),
        }
    }

    pub fn into_vec(self) -> Vec<String> {
        match self {
            TeacherSelector::One(email) => vec![email],
            TeacherSelector::Many(emails) => emails,
        }
    }
}

/// Register students request
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct RegisterRequest {
    pub teacher: Option<String>,
    pub students: Option<Vec<String>>,
}

/// Suspend student request
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct SuspendRequest {
    pub student: Option<String>,
}

/// Retrieve notification recipients request
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct NotificationRequest {
    pub teacher: Option<TeacherSelector>,
    pub notification: Option<String>,
}

/// Common students response
#[derive(Debug, Serialize, ToSchema)]
pub struct CommonStudentsResponse {
    pub students: Vec<String>,
}

/// Notification recipients response
#[derive(Debug, Serialize, ToSchema)]
pub struct RecipientsResponse {
    pub recipients: Vec<String>,
}

/// Treat an empty string like an absent one
pub fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
