//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO, validated at the API boundary
//! - Where the entity is mutable, an update DTO with `Option` fields

pub mod admission;
pub mod alumni;
pub mod banner;
pub mod contact;
pub mod course;
pub mod enquiry;
pub mod exam;
pub mod founder;
pub mod gallery;
pub mod gallery_folder;
pub mod marksheet;
pub mod staff;
pub mod student;
pub mod user;
