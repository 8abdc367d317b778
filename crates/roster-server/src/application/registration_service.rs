//! Registration Service (Use Case)
//!
//! Registers students under a teacher, creating the teacher on first use.

use std::sync::Arc;

use roster::{StudentRepository, TeacherRepository};

use super::{distinct_emails, ServiceError, TeacherService};

/// Application service for student registration
pub struct RegistrationService<T, S>
where
    T: TeacherRepository + ?Sized,
    S: StudentRepository + ?Sized,
{
    teachers: TeacherService<T>,
    students: Arc<S>,
}

impl<T, S> RegistrationService<T, S>
where
    T: TeacherRepository + ?Sized,
    S: StudentRepository + ?Sized,
{
    pub fn new(teacher_repo: Arc<T>, student_repo: Arc<S>) -> Self {
        Self {
            teachers: TeacherService::new(teacher_repo),
            students: student_repo,
        }
    }

    /// Register each student under `teacher_id`, returning rows inserted
    pub async fn register_students(
        &self,
        student_emails: &[String],
        teacher_id: i64,
    ) -> Result<u64, ServiceError> {
        let student_emails = distinct_emails(student_emails);
        if student_emails.is_empty() || teacher_id <= 0 {
            return Err(ServiceError::Registration.reject("missing students or teacher id"));
        }

        let inserted = self
            .students
            .insert_many(&student_emails, teacher_id)
            .await
            .map_err(|e| ServiceError::Registration.wrap(e))?;

        tracing::info!(
            "Registered {} of {} students under teacher {}",
            inserted,
            student_emails.len(),
            teacher_id
        );

        Ok(inserted)
    }

    /// Register students under the teacher with `teacher_email`, creating
    /// the teacher when it does not exist yet
    pub async fn assign_students_to_teacher(
        &self,
        student_emails: &[String],
        teacher_email: &str,
    ) -> Result<(), ServiceError> {
        let student_emails = distinct_emails(student_emails);
        if student_emails.is_empty() || teacher_email.is_empty() {
            return Err(ServiceError::Assignment.reject("missing students or teacher"));
        }

        let teacher_id = match self
            .teachers
            .find_teacher_id(teacher_email)
            .await
            .map_err(|e| ServiceError::Assignment.wrap(e))?
        {
            Some(id) => id,
            None => {
                self.teachers
                    .create_teacher(teacher_email)
                    .await
                    .map_err(|e| ServiceError::Assignment.wrap(e))?
                    .id
            }
        };

        self.register_students(&student_emails, teacher_id)
            .await
            .map_err(|e| ServiceError::Assignment.wrap(e))?;

        Ok(())
    }
}
