//! # clinichub-worker
//!
//! Scheduled background tasks for ClinicHub. The scheduler is owned and
//! started/stopped explicitly by the server binary; nothing here is
//! discovered implicitly.

pub mod jobs;
pub mod scheduler;

pub use jobs::suspension::SuspensionSweeper;
pub use scheduler::SweepScheduler;
