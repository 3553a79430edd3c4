//! Background job implementations.

pub mod suspension;
