//! Submission store service module

mod service;


pub use service::SubmissionService;
