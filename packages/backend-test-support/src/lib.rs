//! Test support shared by the backend's unit and integration tests.
//!
//! Kept free of backend types so it can be used from any test binary.

pub mod logging;
pub mod problem_details;
