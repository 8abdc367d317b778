//! Teacher Directory Service (Use Case)
//!
//! Resolves teachers by email and creates them on first registration.

use std::sync::Arc;

use roster::{Teacher, TeacherRepository};

use super::ServiceError;

/// Application service for Teacher lookup and creation
pub struct TeacherService<T: TeacherRepository + ?Sized> {
    repo: Arc<T>,
}

impl<T: TeacherRepository + ?Sized> TeacherService<T> {
    pub fn new(repo: Arc<T>) -> Self {
        Self { repo }
    }

    /// Id of the teacher with `email`, or `None` when unknown
    pub async fn find_teacher_id(&self, email: &str) -> Result<Option<i64>, ServiceError> {
        if email.is_empty() {
            return Err(ServiceError::TeacherLookup.reject("missing teacher email"));
        }

        self.repo
            .find_id_by_email(email)
            .await
            .map_err(|e| ServiceError::TeacherLookup.wrap(e))
    }

    /// Create a teacher with a store-generated id
    pub async fn create_teacher(&self, email: &str) -> Result<Teacher, ServiceError> {
        if email.is_empty() {
            return Err(ServiceError::TeacherCreate.reject("missing teacher email"));
        }

        let teacher = self
            .repo
            .create(email)
            .await
            .map_err(|e| ServiceError::TeacherCreate.wrap(e))?;

        tracing::info!("Created teacher: {} ({})", teacher.email, teacher.id);

        Ok(teacher)
    }
}
