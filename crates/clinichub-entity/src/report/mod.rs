//! Clinical report domain entities.

pub mod model;

pub use model::{ClinicalReport, CreateReport};
