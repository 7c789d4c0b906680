use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20260115_000001_create_tournament_table::Tournament,
    m20260115_000004_create_squad_table::Squad,
};

static IDX_TOURNAMENT_MATCH_TOURNAMENT_ID: &str = "idx_tournament_match_tournament_id";
static IDX_TOURNAMENT_MATCH_TOURNAMENT_ID_STAGE: &str = "idx_tournament_match_tournament_id_stage";
static FK_TOURNAMENT_MATCH_TOURNAMENT_ID: &str = "fk_tournament_match_tournament_id";
static FK_TOURNAMENT_MATCH_SQUAD_A_ID: &str = "fk_tournament_match_squad_a_id";
static FK_TOURNAMENT_MATCH_SQUAD_B_ID: &str = "fk_tournament_match_squad_b_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TournamentMatch::Table)
                    .if_not_exists()
                    .col(pk_auto(TournamentMatch::Id))
                    .col(integer(TournamentMatch::TournamentId))
                    .col(integer(TournamentMatch::SquadAId))
                    .col(integer(TournamentMatch::SquadBId))
                    .col(string_len_null(TournamentMatch::Stage, 16))
                    .col(string_len(TournamentMatch::Status, 16))
                    .col(integer(TournamentMatch::SquadARuns))
                    .col(integer(TournamentMatch::SquadAWickets))
                    .col(integer_null(TournamentMatch::SquadABalls))
                    .col(string_null(TournamentMatch::SquadAOvers))
                    .col(integer(TournamentMatch::SquadBRuns))
                    .col(integer(TournamentMatch::SquadBWickets))
                    .col(integer_null(TournamentMatch::SquadBBalls))
                    .col(string_null(TournamentMatch::SquadBOvers))
                    .col(json(TournamentMatch::LineupA))
                    .col(json(TournamentMatch::LineupB))
                    .col(integer_null(TournamentMatch::WinnerSquadId))
                    .col(integer_null(TournamentMatch::LoserSquadId))
                    .col(integer_null(TournamentMatch::BracketOrder))
                    .col(boolean(TournamentMatch::IsFinal))
                    .col(boolean(TournamentMatch::ChampionRecorded))
                    .col(string_null(TournamentMatch::Venue))
                    .col(timestamp_null(TournamentMatch::ScheduledAt))
                    .col(timestamp(TournamentMatch::CreatedAt))
                    .col(timestamp(TournamentMatch::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_TOURNAMENT_MATCH_TOURNAMENT_ID)
                    .table(TournamentMatch::Table)
                    .col(TournamentMatch::TournamentId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_TOURNAMENT_MATCH_TOURNAMENT_ID_STAGE)
                    .table(TournamentMatch::Table)
                    .col(TournamentMatch::TournamentId)
                    .col(TournamentMatch::Stage)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_TOURNAMENT_MATCH_TOURNAMENT_ID)
                    .from_tbl(TournamentMatch::Table)
                    .from_col(TournamentMatch::TournamentId)
                    .to_tbl(Tournament::Table)
                    .to_col(Tournament::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_TOURNAMENT_MATCH_SQUAD_A_ID)
                    .from_tbl(TournamentMatch::Table)
                    .from_col(TournamentMatch::SquadAId)
                    .to_tbl(Squad::Table)
                    .to_col(Squad::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_TOURNAMENT_MATCH_SQUAD_B_ID)
                    .from_tbl(TournamentMatch::Table)
                    .from_col(TournamentMatch::SquadBId)
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
                    .name(FK_TOURNAMENT_MATCH_SQUAD_B_ID)
                    .table(TournamentMatch::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_TOURNAMENT_MATCH_SQUAD_A_ID)
                    .table(TournamentMatch::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_TOURNAMENT_MATCH_TOURNAMENT_ID)
                    .table(TournamentMatch::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_TOURNAMENT_MATCH_TOURNAMENT_ID_STAGE)
                    .table(TournamentMatch::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_TOURNAMENT_MATCH_TOURNAMENT_ID)
                    .table(TournamentMatch::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(TournamentMatch::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum TournamentMatch {
    Table,
    Id,
    TournamentId,
    SquadAId,
    SquadBId,
    Stage,
    Status,
    SquadARuns,
    SquadAWickets,
    SquadABalls,
    SquadAOvers,
    SquadBRuns,
    SquadBWickets,
    SquadBBalls,
    SquadBOvers,
    LineupA,
    LineupB,
    WinnerSquadId,
    LoserSquadId,
    BracketOrder,
    IsFinal,
    ChampionRecorded,
    Venue,
    ScheduledAt,
    CreatedAt,
    UpdatedAt,
}
