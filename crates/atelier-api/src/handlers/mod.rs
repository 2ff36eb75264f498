//! HTTP request handlers, one module per resource.

pub mod admission;
pub mod alumni;
pub mod auth;
pub mod banner;
pub mod certificate;
pub mod contact;
pub mod course;
pub mod enquiry;
pub mod exam;
pub mod founder;
pub mod gallery;
pub mod gallery_folder;
pub mod health;
pub mod marksheet;
pub mod staff;
pub mod student;
pub mod upload;
