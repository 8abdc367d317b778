//! Roster API Routes
//!
//! Mounted under the configured prefix (default `/api`):
//! - GET  /commonstudents - Students common to the given teachers
//! - POST /register - Register students under a teacher
//! - POST /suspend - Suspend a student
//! - POST /retrievefornotifications - Notification recipients

pub mod error;
pub mod notifications;
pub mod students;
pub mod swagger;

pub use error::{ApiError, GENERIC_ERROR_MESSAGE};
