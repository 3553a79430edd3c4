//! Patient domain entities.

pub mod background;
pub mod model;

pub use background::{MedicalBackground, UpsertBackground};
pub use model::{CreatePatient, Patient, UpdatePatient};
