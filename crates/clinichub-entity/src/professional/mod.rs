//! Professional domain entities.

pub mod model;

pub use model::{CreateProfessional, Professional, UpdateProfessional};
