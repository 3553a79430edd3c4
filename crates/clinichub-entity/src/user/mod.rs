//! User identity domain entities.

pub mod model;
pub mod role;
pub mod suspension;

pub use model::{CreateUser, User};
pub use role::{GrantedRole, Permission, Role};
pub use suspension::SuspensionUnit;
