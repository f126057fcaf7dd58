use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_query::{ColumnDef, ForeignKey, ForeignKeyAction, Index, Table};

#[derive(DeriveMigrationName)]
pub struct Migration;

// ----- Iden enums for tables & columns -----
#[derive(Iden)]
enum Seasons {
    Table,
    Id,
    Name,
    StartDate,
    EndDate,
}

#[derive(Iden)]
enum Players {
    Table,
    Id,
    Name,
    Email,
    HandicapIndex,
}

#[derive(Iden)]
enum SeasonPlayers {
    Table,
    SeasonId,
    PlayerId,
}

#[derive(Iden)]
enum Rounds {
    Table,
    Id,
    SeasonId,
    Week,
    Date,
    Course,
    TeeTime,
    ExpectedPlayers,
    ConfirmationCode,
}

#[derive(Iden)]
enum Scores {
    Table,
    Id,
    RoundId,
    PlayerId,
    Gross,
    Net,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Seasons::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Seasons::Id).string().not_null().primary_key())
                    .col(ColumnDef::new(Seasons::Name).string().not_null())
                    .col(ColumnDef::new(Seasons::StartDate).date().null())
                    .col(ColumnDef::new(Seasons::EndDate).date().null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Players::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Players::Id).string().not_null().primary_key())
                    .col(ColumnDef::new(Players::Name).string().not_null())
                    .col(ColumnDef::new(Players::Email).string().null())
                    .col(ColumnDef::new(Players::HandicapIndex).double().null())
                    .to_owned(),
            )
            .await?;

        // Roster relation: which players take part in which season
        manager
            .create_table(
                Table::create()
                    .table(SeasonPlayers::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(SeasonPlayers::SeasonId).string().not_null())
                    .col(ColumnDef::new(SeasonPlayers::PlayerId).string().not_null())
                    .primary_key(
                        Index::create()
                            .col(SeasonPlayers::SeasonId)
                            .col(SeasonPlayers::PlayerId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_season_players_season")
                            .from(SeasonPlayers::Table, SeasonPlayers::SeasonId)
                            .to(Seasons::Table, Seasons::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_season_players_player")
                            .from(SeasonPlayers::Table, SeasonPlayers::PlayerId)
                            .to(Players::Table, Players::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Rounds::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Rounds::Id).string().not_null().primary_key())
                    .col(ColumnDef::new(Rounds::SeasonId).string().not_null())
                    .col(ColumnDef::new(Rounds::Week).integer().not_null())
                    .col(ColumnDef::new(Rounds::Date).date().not_null())
                    .col(ColumnDef::new(Rounds::Course).string().null())
                    .col(ColumnDef::new(Rounds::TeeTime).string().null())
                    .col(ColumnDef::new(Rounds::ExpectedPlayers).integer().null())
                    .col(ColumnDef::new(Rounds::ConfirmationCode).string().null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_rounds_season")
                            .from(Rounds::Table, Rounds::SeasonId)
                            .to(Seasons::Table, Seasons::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_rounds_season_date")
                    .table(Rounds::Table)
                    .col(Rounds::SeasonId)
                    .col(Rounds::Date)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Scores::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Scores::Id).string().not_null().primary_key())
                    .col(ColumnDef::new(Scores::RoundId).string().not_null())
                    .col(ColumnDef::new(Scores::PlayerId).string().not_null())
                    .col(ColumnDef::new(Scores::Gross).integer().not_null())
                    .col(ColumnDef::new(Scores::Net).integer().null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_scores_round")
                            .from(Scores::Table, Scores::RoundId)
                            .to(Rounds::Table, Rounds::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_scores_player")
                            .from(Scores::Table, Scores::PlayerId)
                            .to(Players::Table, Players::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Non-unique: one score per (round, player) is kept by the upsert path
        manager
            .create_index(
                Index::create()
                    .name("ix_scores_round_player")
                    .table(Scores::Table)
                    .col(Scores::RoundId)
                    .col(Scores::PlayerId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_scores_player")
                    .table(Scores::Table)
                    .col(Scores::PlayerId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // drop in reverse order + drop index before table
        manager
            .drop_index(
                Index::drop()
                    .name("ix_scores_player")
                    .table(Scores::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("ix_scores_round_player")
                    .table(Scores::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().table(Scores::Table).to_owned())
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("ix_rounds_season_date")
                    .table(Rounds::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().table(Rounds::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(SeasonPlayers::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Players::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Seasons::Table).to_owned())
            .await?;

        Ok(())
    }
}
