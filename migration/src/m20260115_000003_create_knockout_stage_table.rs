use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260115_000001_create_tournament_table::Tournament;

static IDX_KNOCKOUT_STAGE_TOURNAMENT_ID: &str = "idx_knockout_stage_tournament_id";
static FK_KNOCKOUT_STAGE_TOURNAMENT_ID: &str = "fk_knockout_stage_tournament_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(KnockoutStage::Table)
                    .if_not_exists()
                    .col(pk_auto(KnockoutStage::Id))
                    .col(integer(KnockoutStage::TournamentId))
                    .col(string_len(KnockoutStage::Key, 16))
                    .col(string(KnockoutStage::Label))
                    .col(integer(KnockoutStage::RequiredMatches))
                    .col(integer(KnockoutStage::Position))
                    .col(boolean(KnockoutStage::Enabled))
                    .col(boolean(KnockoutStage::AutoSeed))
                    .col(timestamp(KnockoutStage::CreatedAt))
                    .col(timestamp(KnockoutStage::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_KNOCKOUT_STAGE_TOURNAMENT_ID)
                    .table(KnockoutStage::Table)
                    .col(KnockoutStage::TournamentId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_KNOCKOUT_STAGE_TOURNAMENT_ID)
                    .from_tbl(KnockoutStage::Table)
                    .from_col(KnockoutStage::TournamentId)
                    .to_tbl(Tournament::Table)
                    .to_col(Tournament::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_KNOCKOUT_STAGE_TOURNAMENT_ID)
                    .table(KnockoutStage::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_KNOCKOUT_STAGE_TOURNAMENT_ID)
                    .table(KnockoutStage::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(KnockoutStage::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum KnockoutStage {
    Table,
    Id,
    TournamentId,
    Key,
    Label,
    RequiredMatches,
    Position,
    Enabled,
    AutoSeed,
    CreatedAt,
    UpdatedAt,
}
