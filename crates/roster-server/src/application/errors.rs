//! Service Errors
//!
//! One error kind per business operation. Storage failures and rejected
//! arguments both collapse into the operation's kind; the cause is logged
//! here and never handed to the caller.

use thiserror::Error;

/// Business layer errors. The `#[error]` text is the user-facing message table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ServiceError {
    #[error("Service for retrieving students records failed.")]
    RosterQuery,

    #[error("Service for retrieving teacher ID failed.")]
    TeacherLookup,

    #[error("Service for creating teacher failed.")]
    TeacherCreate,

    #[error("Service for creating students failed.")]
    Registration,

    #[error("Service for assigning students to teacher failed.")]
    Assignment,

    #[error("Service for suspending student failed.")]
    Suspension,

    #[error("Service for retrieving students for notification failed.")]
    NotificationResolution,
}

impl ServiceError {
    /// Collapse `cause` into this kind
    pub fn wrap<E: std::fmt::Display>(self, cause: E) -> Self {
        tracing::warn!(kind = ?self, cause = %cause, "{}", self);
        self
    }

    /// Reject a call whose required arguments are missing
    pub fn reject(self, reason: &str) -> Self {
        tracing::warn!(kind = ?self, "{} ({})", self, reason);
        self
    }
}
