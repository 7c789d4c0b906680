use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20260115_000001_create_tournament_table::Tournament,
    m20260115_000004_create_squad_table::Squad,
};

static FK_CHAMPION_TOURNAMENT_ID: &str = "fk_champion_tournament_id";
static FK_CHAMPION_WINNER_SQUAD_ID: &str = "fk_champion_winner_squad_id";
static FK_CHAMPION_RUNNER_UP_SQUAD_ID: &str = "fk_champion_runner_up_squad_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Champion::Table)
                    .if_not_exists()
                    .col(pk_auto(Champion::Id))
                    .col(integer_uniq(Champion::TournamentId))
                    .col(integer(Champion::WinnerSquadId))
                    .col(integer(Champion::RunnerUpSquadId))
                    .col(text(Champion::ResultSummary))
                    .col(text(Champion::FinalMatchSummary))
                    .col(json(Champion::KeyPlayers))
                    .col(timestamp(Champion::CreatedAt))
                    .col(timestamp(Champion::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_CHAMPION_TOURNAMENT_ID)
                    .from_tbl(Champion::Table)
                    .from_col(Champion::TournamentId)
                    .to_tbl(Tournament::Table)
                    .to_col(Tournament::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_CHAMPION_WINNER_SQUAD_ID)
                    .from_tbl(Champion::Table)
                    .from_col(Champion::WinnerSquadId)
                    .to_tbl(Squad::Table)
                    .to_col(Squad::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_CHAMPION_RUNNER_UP_SQUAD_ID)
                    .from_tbl(Champion::Table)
                    .from_col(Champion::RunnerUpSquadId)
                    .to_tbl(Squad::Table)
                    .to_col(Squad::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_CHAMPION_RUNNER_UP_SQUAD_ID)
                    .table(Champion::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_CHAMPION_WINNER_SQUAD_ID)
                    .table(Champion::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_CHAMPION_TOURNAMENT_ID)
                    .table(Champion::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Champion::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Champion {
    Table,
    Id,
    TournamentId,
    WinnerSquadId,
    RunnerUpSquadId,
    ResultSummary,
    FinalMatchSummary,
    KeyPlayers,
    CreatedAt,
    UpdatedAt,
}
