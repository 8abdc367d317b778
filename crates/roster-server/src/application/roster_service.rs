//! Roster Query Service (Use Case)
//!
//! Lists students, either every registration or those common to a set of
//! teachers.

use std::sync::Arc;

use roster::StudentRepository;

use super::{distinct_emails, ServiceError};

/// Application service for roster queries
pub struct RosterService<S: StudentRepository + ?Sized> {
    repo: Arc<S>,
}

impl<S: StudentRepository + ?Sized> RosterService<S> {
    pub fn new(repo: Arc<S>) -> Self {
        Self { repo }
    }

    /// Email of every registered student, in store order
    pub async fn list_all_students(&self) -> Result<Vec<String>, ServiceError> {
        self.repo
            .list_emails()
            .await
            .map_err(|e| ServiceError::RosterQuery.wrap(e))
    }

    /// Students registered under every one of `teachers`.
    ///
    /// An empty selection returns an empty list without touching storage.
    pub async fn list_students_by_teachers(
        &self,
        teachers: &[String],
    ) -> Result<Vec<String>, ServiceError> {
        let teachers = distinct_emails(teachers);
        if teachers.is_empty() {
            return Ok(Vec::new());
        }

        let entries = self
            .repo
            .find_by_teachers(&teachers)
            .await
            .map_err(|e| ServiceError::RosterQuery.wrap(e))?;

        tracing::debug!(
            "Found {} students common to {} teachers",
            entries.len(),
            teachers.len()
        );

        Ok(entries.into_iter().map(|entry| entry.email).collect())
    }
}
