//! Submission route handlers

pub mod list;
pub mod submit;

pub use list::list_submissions;
pub use submit::submit;
