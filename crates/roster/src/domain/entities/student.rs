//! Student - Registration of a student email under one teacher
//!
//! A student registered under several teachers has one record per teacher.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::StudentStatus;

/// Student registration record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: i64,
    pub email: String,
    pub teacher_id: i64,
    pub status: StudentStatus,
    pub created_at: DateTime<Utc>,
}

/// Email and status of a student matched by a roster query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterEntry {
    pub email: String,
    pub status: StudentStatus,
}

impl RosterEntry {
    pub fn new(email: impl Into<String>, status: StudentStatus) -> Self {
        Self {
            email: email.into(),
            status,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == StudentStatus::Active
    }
}
