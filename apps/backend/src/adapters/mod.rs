//! SeaORM adapters. Functions return `DbErr`; repositories map to `DomainError`.

pub mod players_sea;
pub mod rounds_sea;
pub mod scores_sea;
pub mod seasons_sea;
