//! Medical record domain entities.

pub mod diagnosis;
pub mod filter;
pub mod follow_up;
pub mod model;

pub use diagnosis::{CreateDiagnosis, Diagnosis};
pub use filter::RecordFilter;
pub use follow_up::{CreateFollowUp, FollowUpEntry};
pub use model::{CreateRecord, MedicalRecord};
