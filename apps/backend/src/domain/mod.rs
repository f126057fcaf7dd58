//! Domain layer: pure league logic, no I/O.

pub mod league;
pub mod movement;
pub mod standings;
pub mod summary;
pub mod validation;

#[cfg(test)]
mod fixtures;
#[cfg(test)]
mod test_prelude;
#[cfg(test)]
mod tests_validation;

// Re-exports for ergonomics
pub use league::{
    Player, PlayerScoreRow, Round, RoundScoreRow, Score, ScoreUpdate, Season, SeasonScoreRow,
};
pub use movement::Movement;
pub use standings::StandingRow;
