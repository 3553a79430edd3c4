//! Clinical report services.

pub mod service;

pub use service::ReportService;
