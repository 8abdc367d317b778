//! Roster API Models
//!
//! Request and response bodies of the roster endpoints.

mod roster;

pub use roster::*;
