use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20260115_000001_create_tournament_table::Tournament,
    m20260115_000002_create_tournament_group_table::TournamentGroup,
};

static IDX_SQUAD_TOURNAMENT_ID: &str = "idx_squad_tournament_id";
static IDX_SQUAD_GROUP_ID: &str = "idx_squad_group_id";
static FK_SQUAD_TOURNAMENT_ID: &str = "fk_squad_tournament_id";
static FK_SQUAD_GROUP_ID: &str = "fk_squad_group_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Squad::Table)
                    .if_not_exists()
                    .col(pk_auto(Squad::Id))
                    .col(integer(Squad::TournamentId))
                    .col(integer_null(Squad::GroupId))
                    .col(string(Squad::Name))
                    .col(string_null(Squad::Batch))
                    .col(timestamp(Squad::CreatedAt))
                    .col(timestamp(Squad::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_SQUAD_TOURNAMENT_ID)
                    .table(Squad::Table)
                    .col(Squad::TournamentId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_SQUAD_GROUP_ID)
                    .table(Squad::Table)
                    .col(Squad::GroupId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_SQUAD_TOURNAMENT_ID)
                    .from_tbl(Squad::Table)
                    .from_col(Squad::TournamentId)
                    .to_tbl(Tournament::Table)
                    .to_col(Tournament::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_SQUAD_GROUP_ID)
                    .from_tbl(Squad::Table)
                    .from_col(Squad::GroupId)
                    .to_tbl(TournamentGroup::Table)
                    .to_col(TournamentGroup::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_SQUAD_GROUP_ID)
                    .table(Squad::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_SQUAD_TOURNAMENT_ID)
                    .table(Squad::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_SQUAD_GROUP_ID)
                    .table(Squad::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_SQUAD_TOURNAMENT_ID)
                    .table(Squad::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Squad::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Squad {
    Table,
    Id,
    TournamentId,
    GroupId,
    Name,
    Batch,
    CreatedAt,
    UpdatedAt,
}
