//! Route handlers
//!
//! - `otp` - issuing and verifying one-time codes
//! - `submission` - saving and listing registration forms
//! - `health` - liveness and storage probe

pub mod health;
pub mod otp;
pub mod submission;
