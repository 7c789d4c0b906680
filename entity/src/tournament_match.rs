use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::types::Lineup;

/// Scoring status of a match. Statistics are aggregated only for matches in
/// `Completed` or `Finished` state.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    #[sea_orm(string_value = "upcoming")]
    Upcoming,
    #[sea_orm(string_value = "live")]
    Live,
    #[sea_orm(string_value = "completed")]
    Completed,
    #[sea_orm(string_value = "finished")]
    Finished,
}

impl MatchStatus {
    /// Whether a match in this status is eligible for statistics
    /// aggregation.
    pub fn is_settled(self) -> bool {
        matches!(self, Self::Completed | Self::Finished)
    }
}

/// Tournament stage a match belongs to. A match with no stage set is
/// treated as a group-stage match.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "snake_case")]
pub enum MatchStage {
    #[sea_orm(string_value = "group")]
    Group,
    #[sea_orm(string_value = "qualifier")]
    Qualifier,
    #[sea_orm(string_value = "eliminator")]
    Eliminator,
    #[sea_orm(string_value = "semi_final")]
    SemiFinal,
    #[sea_orm(string_value = "final")]
    Final,
    #[sea_orm(string_value = "third_place")]
    ThirdPlace,
}

impl std::str::FromStr for MatchStage {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "group" => Ok(Self::Group),
            "qualifier" => Ok(Self::Qualifier),
            "eliminator" => Ok(Self::Eliminator),
            "semi_final" => Ok(Self::SemiFinal),
            "final" => Ok(Self::Final),
            "third_place" => Ok(Self::ThirdPlace),
            _ => Err(()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "tournament_match")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub tournament_id: i32,
    pub squad_a_id: i32,
    pub squad_b_id: i32,
    pub stage: Option<MatchStage>,
    pub status: MatchStatus,
    pub squad_a_runs: i32,
    pub squad_a_wickets: i32,
    pub squad_a_balls: Option<i32>,
    pub squad_a_overs: Option<String>,
    pub squad_b_runs: i32,
    pub squad_b_wickets: i32,
    pub squad_b_balls: Option<i32>,
    pub squad_b_overs: Option<String>,
    #[sea_orm(column_type = "Json")]
    pub lineup_a: Lineup,
    #[sea_orm(column_type = "Json")]
    pub lineup_b: Lineup,
    pub winner_squad_id: Option<i32>,
    pub loser_squad_id: Option<i32>,
    pub bracket_order: Option<i32>,
    pub is_final: bool,
    pub champion_recorded: bool,
    pub venue: Option<String>,
    pub scheduled_at: Option<ChronoDateTime>,
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
        from = "Column::SquadAId",
        to = "super::squad::Column::Id"
    )]
    SquadA,
    #[sea_orm(
        belongs_to = "super::squad::Entity",
        from = "Column::SquadBId",
        to = "super::squad::Column::Id"
    )]
    SquadB,
}

impl Related<super::tournament::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Tournament.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
