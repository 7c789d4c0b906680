use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Lifecycle status of a tournament.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "snake_case")]
pub enum TournamentStatus {
    #[sea_orm(string_value = "upcoming")]
    Upcoming,
    #[sea_orm(string_value = "ongoing")]
    Ongoing,
    #[sea_orm(string_value = "completed")]
    Completed,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "tournament")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub status: TournamentStatus,
    pub created_at: ChronoDateTime,
    pub updated_at: ChronoDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::squad::Entity")]
    Squad,
    #[sea_orm(has_many = "super::tournament_group::Entity")]
    TournamentGroup,
    #[sea_orm(has_many = "super::knockout_stage::Entity")]
    KnockoutStage,
    #[sea_orm(has_many = "super::tournament_match::Entity")]
    TournamentMatch,
}

impl Related<super::squad::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Squad.def()
    }
}

impl Related<super::tournament_group::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TournamentGroup.def()
    }
}

impl Related<super::knockout_stage::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::KnockoutStage.def()
    }
}

impl Related<super::tournament_match::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TournamentMatch.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
