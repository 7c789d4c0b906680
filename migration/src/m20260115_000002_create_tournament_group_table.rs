use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260115_000001_create_tournament_table::Tournament;

static IDX_TOURNAMENT_GROUP_TOURNAMENT_ID: &str = "idx_tournament_group_tournament_id";
static FK_TOURNAMENT_GROUP_TOURNAMENT_ID: &str = "fk_tournament_group_tournament_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TournamentGroup::Table)
                    .if_not_exists()
                    .col(pk_auto(TournamentGroup::Id))
                    .col(integer(TournamentGroup::TournamentId))
                    .col(string(TournamentGroup::Key))
                    .col(string(TournamentGroup::Name))
                    .col(integer(TournamentGroup::QualifierSlots))
                    .col(timestamp(TournamentGroup::CreatedAt))
                    .col(timestamp(TournamentGroup::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_TOURNAMENT_GROUP_TOURNAMENT_ID)
                    .table(TournamentGroup::Table)
                    .col(TournamentGroup::TournamentId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_TOURNAMENT_GROUP_TOURNAMENT_ID)
                    .from_tbl(TournamentGroup::Table)
                    .from_col(TournamentGroup::TournamentId)
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
                    .name(FK_TOURNAMENT_GROUP_TOURNAMENT_ID)
                    .table(TournamentGroup::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_TOURNAMENT_GROUP_TOURNAMENT_ID)
                    .table(TournamentGroup::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(TournamentGroup::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum TournamentGroup {
    Table,
    Id,
    TournamentId,
    Key,
    Name,
    QualifierSlots,
    CreatedAt,
    UpdatedAt,
}
