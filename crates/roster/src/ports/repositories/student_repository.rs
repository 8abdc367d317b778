//! Student Repository Port
//!
//! Abstract interface for Student persistence operations.

use async_trait::async_trait;

use crate::domain::{RosterEntry, StorageError, StudentStatus};

/// Repository interface for Student registrations
#[async_trait]
pub trait StudentRepository: Send + Sync {
    /// Email of every registration, in store order
    async fn list_emails(&self) -> Result<Vec<String>, StorageError>;

    /// Students registered under every one of the given teachers.
    ///
    /// `teacher_emails` must not contain duplicates; a student qualifies
    /// when its number of matching teachers equals `teacher_emails.len()`.
    /// A student with any suspended registration is reported as suspended.
    async fn find_by_teachers(
        &self,
        teacher_emails: &[String],
    ) -> Result<Vec<RosterEntry>, StorageError>;

    /// Register each student under `teacher_id`, returning rows inserted.
    /// Pairs that already exist are skipped.
    async fn insert_many(
        &self,
        student_emails: &[String],
        teacher_id: i64,
    ) -> Result<u64, StorageError>;

    /// Set the status of every registration of `email`, returning rows touched
    async fn update_status(&self, email: &str, status: StudentStatus)
        -> Result<u64, StorageError>;

    /// Subset of `student_emails` currently in `status`, deduplicated.
    /// An empty input yields an empty result.
    async fn filter_by_status(
        &self,
        student_emails: &[String],
        status: StudentStatus,
    ) -> Result<Vec<String>, StorageError>;
}
