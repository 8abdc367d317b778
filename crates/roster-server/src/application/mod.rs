//! Application Layer (Use Cases)
//!
//! Orchestrates roster operations over the repository ports. Every
//! operation reports failure as exactly one [`ServiceError`] kind.

mod errors;
mod notification_service;
mod registration_service;
mod roster_service;
mod suspension_service;
mod teacher_service;

pub use errors::ServiceError;
pub use notification_service::NotificationService;
pub use registration_service::RegistrationService;
pub use roster_service::RosterService;
pub use suspension_service::SuspensionService;
pub use teacher_service::TeacherService;

/// Non-empty emails in first-seen order, without duplicates
pub(crate) fn distinct_emails(emails: &[String]) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    emails
        .iter()
        .filter(|email| !email.is_empty())
        .filter(|email| seen.insert(email.as_str()))
        .cloned()
        .collect()
}

#[cfg(test)]
pub(crate) fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
