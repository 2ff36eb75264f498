//! Request middleware and extractors shared across handlers.

pub mod auth;
