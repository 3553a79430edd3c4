//! School reference entities.

pub mod model;

pub use model::{CreateSchool, School, UpdateSchool};
