use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

pub struct SquadRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SquadRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        tournament_id: i32,
        group_id: Option<i32>,
        name: &str,
        batch: Option<String>,
    ) -> Result<entity::squad::Model, DbErr> {
        let squad = entity::squad::ActiveModel {
            tournament_id: ActiveValue::Set(tournament_id),
            group_id: ActiveValue::Set(group_id),
            name: ActiveValue::Set(name.to_string()),
            batch: ActiveValue::Set(batch),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        squad.insert(self.db).await
    }

    pub async fn get(&self, id: i32) -> Result<Option<entity::squad::Model>, DbErr> {
        entity::prelude::Squad::find_by_id(id).one(self.db).await
    }

    pub async fn get_many_by_tournament(
        &self,
        tournament_id: i32,
    ) -> Result<Vec<entity::squad::Model>, DbErr> {
        entity::prelude::Squad::find()
            .filter(entity::squad::Column::TournamentId.eq(tournament_id))
            .all(self.db)
            .await
    }

    /// Moves a squad into a group (or out of all groups with `None`).
    pub async fn assign_group(&self, id: i32, group_id: Option<i32>) -> Result<(), DbErr> {
        let squad = entity::squad::ActiveModel {
            id: ActiveValue::Unchanged(id),
            group_id: ActiveValue::Set(group_id),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        squad.update(self.db).await?;

        Ok(())
    }
}
