#![allow(dead_code)]

pub mod league_state;

pub use app_builder::create_test_app;
pub use league_state::{admin_enabled, seeded_sqlite_state, TEST_ADMIN_KEY};
