//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - Projections returned by list queries
//! - A create DTO for inserts

pub mod patient;
