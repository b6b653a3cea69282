//! HTTP layer of the KYC onboarding backend
//!
//! Exposes the OTP ledger and the submission store over four JSON endpoints
//! plus a health probe. Every response uses the `{ ok, ... }` envelope from
//! `kyc_shared`.

pub mod app;
pub mod bootstrap;
pub mod config;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;

pub use app::{configure, create_app, AppState};
