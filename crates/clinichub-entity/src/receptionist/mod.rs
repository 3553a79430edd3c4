//! Receptionist domain entities.

pub mod model;

pub use model::{CreateReceptionist, Receptionist, UpdateReceptionist};
