//! # clinichub-service
//!
//! Business logic services for ClinicHub. Every service takes the
//! authenticated [`context::RequestContext`] explicitly — there is no
//! ambient security state anywhere in the call chain.

pub mod context;
pub mod identity;
pub mod patient;
pub mod professional;
pub mod receptionist;
pub mod record;
pub mod report;
pub mod school;
pub mod user;

pub use context::RequestContext;
