pub mod players;
pub mod rounds;
pub mod scores;
pub mod season_players;
pub mod seasons;

pub use players::Entity as Players;
pub use players::Model as Player;
pub use rounds::Entity as Rounds;
pub use rounds::Model as Round;
pub use scores::Entity as Scores;
pub use scores::Model as Score;
pub use season_players::Entity as SeasonPlayers;
pub use season_players::Model as SeasonPlayer;
pub use seasons::Entity as Seasons;
pub use seasons::Model as Season;
