//! Request handlers.
//!
//! Handlers delegate to the repositories in `transit_db` and map errors via
//! [`AppError`](crate::error::AppError).

pub mod patient;
