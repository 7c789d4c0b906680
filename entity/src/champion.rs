use sea_orm::entity::prelude::*;

use crate::types::KeyPlayers;

/// The persisted summary of a tournament's final outcome.
///
/// One per tournament; recording the same final twice overwrites in place,
/// which is naturally idempotent on identical inputs.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "champion")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub tournament_id: i32,
    pub winner_squad_id: i32,
    pub runner_up_squad_id: i32,
    pub result_summary: String,
    pub final_match_summary: String,
    #[sea_orm(column_type = "Json")]
    pub key_players: KeyPlayers,
    pub created_at: ChronoDateTime,
    pub updated_at: ChronoDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::tournament::Entity",
        from = "Column::TournamentId",
        to = "super::tournament::Column::Id"
    )]
    Tournament,
    #[sea_orm(
        belongs_to = "super::squad::Entity",
        from = "Column::WinnerSquadId",
        to = "super::squad::Column::Id"
    )]
    WinnerSquad,
    #[sea_orm(
        belongs_to = "super::squad::Entity",
        from = "Column::RunnerUpSquadId",
        to = "super::squad::Column::Id"
    )]
    RunnerUpSquad,
}

impl Related<super::tournament::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Tournament.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
