//! Domain Entities
//!
//! Pure domain models without infrastructure dependencies.
//! - Teacher: owner of a roster, keyed by email
//! - Student: one registration of a student email under a teacher
//! - RosterEntry: email/status projection returned by roster queries

mod student;
mod teacher;

pub use student::*;
pub use teacher::*;
