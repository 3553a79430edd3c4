//! Integration test harness.
//!
//! Requires a PostgreSQL instance; set `TEST_DATABASE_URL` to override
//! the default local connection string.

mod helpers;

mod auth_test;
mod patient_test;
mod record_test;
mod suspension_test;
