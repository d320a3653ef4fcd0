//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - Where partial edits exist, a `Deserialize` update DTO (all `Option`
//!   fields) for patches

pub mod chart;
pub mod collection;
pub mod data_source;
