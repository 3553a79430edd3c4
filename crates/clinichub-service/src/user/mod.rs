//! User administration services.

pub mod admin;

pub use admin::AdminUserService;
