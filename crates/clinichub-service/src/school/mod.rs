//! School services.

pub mod service;

pub use service::SchoolService;
