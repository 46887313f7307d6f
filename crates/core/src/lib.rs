//! Domain types and rules for the patient transport service.
//!
//! This crate has no I/O: it holds the shared error type, registration
//! validation, and the mock transport readings served to the dashboard.

pub mod error;
pub mod patient;
pub mod transport;
pub mod types;
