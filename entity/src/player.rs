use sea_orm::entity::prelude::*;

use crate::types::{CareerTotals, MatchHistory, PlayerMatchSummary};

/// A registered player and their career aggregate.
///
/// `past_matches` and `stats` are owned exclusively by the career service:
/// they are created with zero totals on registration and mutated only under
/// a scoped transactional read-modify-write against this single row.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "player")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub squad_id: Option<i32>,
    pub name: String,
    pub role: Option<String>,
    #[sea_orm(column_type = "Json")]
    pub past_matches: MatchHistory,
    #[sea_orm(column_type = "Json")]
    pub stats: CareerTotals,
    #[sea_orm(column_type = "Json", nullable)]
    pub last_match_summary: Option<PlayerMatchSummary>,
    pub created_at: ChronoDateTime,
    pub updated_at: ChronoDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::squad::Entity",
        from = "Column::SquadId",
        to = "super::squad::Column::Id"
    )]
    Squad,
}

impl Related<super::squad::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Squad.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
