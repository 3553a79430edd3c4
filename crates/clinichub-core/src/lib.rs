//! # clinichub-core
//!
//! Core crate for ClinicHub. Contains configuration schemas, pagination
//! and response types, and the unified error system.
//!
//! This crate has **no** internal dependencies on other ClinicHub crates.

pub mod config;
pub mod error;
pub mod result;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
