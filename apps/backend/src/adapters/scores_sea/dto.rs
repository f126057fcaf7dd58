//! DTOs for scores_sea adapter.

/// DTO for writing one player's score in a round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreUpsert {
    pub round_id: String,
    pub player_id: String,
    pub gross: i32,
    pub net: Option<i32>,
}

impl ScoreUpsert {
    /// Id given to a score row created by the write path.
    pub fn new_score_id(&self) -> String {
        format!("score-{}-{}", self.round_id, self.player_id)
    }
}
