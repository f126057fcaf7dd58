//! League repositories: the trait the services depend on and its
//! SeaORM, in-memory and fallback implementations.

pub mod fallback;
pub mod league;
pub mod memory;
pub mod ordering;
pub mod rows;
pub mod sample;
pub mod sea;

pub use fallback::FallbackRepo;
pub use league::{LeagueRepo, RECENT_SCORES_LIMIT};
pub use memory::MemoryLeagueRepo;
pub use sample::{sample_league, LeagueData};
pub use sea::SeaLeagueRepo;
