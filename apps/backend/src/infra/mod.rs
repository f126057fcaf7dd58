//! Infrastructure layer - database bootstrap, seeding, state building and error mapping.

pub mod db;
pub mod db_errors;
pub mod seed;
pub mod state;
