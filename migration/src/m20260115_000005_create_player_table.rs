use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260115_000004_create_squad_table::Squad;

static IDX_PLAYER_SQUAD_ID: &str = "idx_player_squad_id";
static FK_PLAYER_SQUAD_ID: &str = "fk_player_squad_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Player::Table)
                    .if_not_exists()
                    .col(pk_auto(Player::Id))
                    .col(integer_null(Player::SquadId))
                    .col(string(Player::Name))
                    .col(string_null(Player::Role))
                    .col(json(Player::PastMatches))
                    .col(json(Player::Stats))
                    .col(json_null(Player::LastMatchSummary))
                    .col(timestamp(Player::CreatedAt))
                    .col(timestamp(Player::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PLAYER_SQUAD_ID)
                    .table(Player::Table)
                    .col(Player::SquadId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_PLAYER_SQUAD_ID)
                    .from_tbl(Player::Table)
                    .from_col(Player::SquadId)
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
                    .name(FK_PLAYER_SQUAD_ID)
                    .table(Player::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_PLAYER_SQUAD_ID)
                    .table(Player::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Player::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Player {
    Table,
    Id,
    SquadId,
    Name,
    Role,
    PastMatches,
    Stats,
    LastMatchSummary,
    CreatedAt,
    UpdatedAt,
}
