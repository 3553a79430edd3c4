//! # clinichub-entity
//!
//! Domain entity models for ClinicHub. Every struct in this crate
//! represents a database table row or a domain value object. All entities
//! derive `Debug`, `Clone`, `Serialize`, `Deserialize`, and database
//! entities additionally derive `sqlx::FromRow`.

pub mod patient;
pub mod professional;
pub mod receptionist;
pub mod record;
pub mod report;
pub mod school;
pub mod user;
