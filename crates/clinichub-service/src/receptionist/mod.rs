//! Receptionist services.

pub mod service;

pub use service::{ReceptionistService, RegisterReceptionist};
