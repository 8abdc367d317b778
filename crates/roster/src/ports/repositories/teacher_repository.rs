//! Teacher Repository Port
//!
//! Abstract interface for Teacher persistence operations.

use async_trait::async_trait;

use crate::domain::{StorageError, Teacher};

/// Repository interface for Teacher entities
#[async_trait]
pub trait TeacherRepository: Send + Sync {
    /// Find a teacher's id by email
    async fn find_id_by_email(&self, email: &str) -> Result<Option<i64>, StorageError>;

    /// Create a teacher. An existing teacher with the same email is returned
    /// unchanged instead of being duplicated.
    async fn create(&self, email: &str) -> Result<Teacher, StorageError>;
}
