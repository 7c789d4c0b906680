use sea_orm::entity::prelude::*;

/// A knockout-stage definition for a tournament (e.g. semi-finals, final).
///
/// The seeder operates on the stage with the lowest `position`; later stages
/// are administered manually as earlier rounds complete.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "knockout_stage")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub tournament_id: i32,
    pub key: String,
    pub label: String,
    pub required_matches: i32,
    pub position: i32,
    pub enabled: bool,
    pub auto_seed: bool,
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
}

impl Related<super::tournament::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Tournament.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
