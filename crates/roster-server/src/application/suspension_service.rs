//! Suspension Service (Use Case)

use std::sync::Arc;

use roster::{StudentRepository, StudentStatus};

use super::ServiceError;

/// Application service for suspending students
pub struct SuspensionService<S: StudentRepository + ?Sized> {
    repo: Arc<S>,
}

impl<S: StudentRepository + ?Sized> SuspensionService<S> {
    pub fn new(repo: Arc<S>) -> Self {
        Self { repo }
    }

    /// Suspend every registration of `email`.
    ///
    /// Unknown or already suspended students succeed without change.
    pub async fn suspend_student(&self, email: &str) -> Result<(), ServiceError> {
        if email.is_empty() {
            return Err(ServiceError::Suspension.reject("missing student email"));
        }

        let touched = self
            .repo
            .update_status(email, StudentStatus::Suspend)
            .await
            .map_err(|e| ServiceError::Suspension.wrap(e))?;

        if touched == 0 {
            tracing::debug!("Suspend matched no registrations for {}", email);
        } else {
            tracing::info!("Suspended student {} ({} registrations)", email, touched);
        }

        Ok(())
    }
}
