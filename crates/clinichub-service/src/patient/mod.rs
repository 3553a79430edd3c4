//! Patient services.

pub mod service;

pub use service::{PatientService, RegisterPatient};
