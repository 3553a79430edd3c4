//! Medical record services.

pub mod service;

pub use service::{RecordService, RecordWithDetails};
