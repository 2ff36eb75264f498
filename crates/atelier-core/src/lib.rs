//! Shared domain types, the error taxonomy, and pure domain logic for the
//! atelier backend. This crate has no I/O; everything here is unit-testable
//! without a database or network.

pub mod error;
pub mod grading;
pub mod types;
pub mod validation;
