//! Teacher - Roster owner
//!
//! Pure domain entity without infrastructure dependencies.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Teacher, identified to callers by email and internally by a store-generated id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Teacher {
    pub id: i64,
    pub email: String,
    pub created_at: DateTime<Utc>,
}
