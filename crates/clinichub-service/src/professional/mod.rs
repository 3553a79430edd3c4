//! Professional services.

pub mod service;

pub use service::{ProfessionalService, RegisterProfessional};
