use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use entity::tournament::TournamentStatus;

pub struct TournamentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TournamentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, name: &str) -> Result<entity::tournament::Model, DbErr> {
        let tournament = entity::tournament::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            status: ActiveValue::Set(TournamentStatus::Upcoming),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        tournament.insert(self.db).await
    }

    pub async fn get(&self, id: i32) -> Result<Option<entity::tournament::Model>, DbErr> {
        entity::prelude::Tournament::find_by_id(id).one(self.db).await
    }

    pub async fn update_status(
        &self,
        id: i32,
        status: TournamentStatus,
    ) -> Result<(), DbErr> {
        let tournament = entity::tournament::ActiveModel {
            id: ActiveValue::Unchanged(id),
            status: ActiveValue::Set(status),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        tournament.update(self.db).await?;

        Ok(())
    }

    /// Group definitions for a tournament, in definition order.
    pub async fn get_groups(
        &self,
        tournament_id: i32,
    ) -> Result<Vec<entity::tournament_group::Model>, DbErr> {
        entity::prelude::TournamentGroup::find()
            .filter(entity::tournament_group::Column::TournamentId.eq(tournament_id))
            .order_by_asc(entity::tournament_group::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn create_group(
        &self,
        tournament_id: i32,
        key: &str,
        name: &str,
        qualifier_slots: i32,
    ) -> Result<entity::tournament_group::Model, DbErr> {
        let group = entity::tournament_group::ActiveModel {
            tournament_id: ActiveValue::Set(tournament_id),
            key: ActiveValue::Set(key.to_string()),
            name: ActiveValue::Set(name.to_string()),
            qualifier_slots: ActiveValue::Set(qualifier_slots),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        group.insert(self.db).await
    }

    /// Knockout stage definitions for a tournament, ordered by bracket
    /// position (the seeder operates on the first).
    pub async fn get_knockout_stages(
        &self,
        tournament_id: i32,
    ) -> Result<Vec<entity::knockout_stage::Model>, DbErr> {
        entity::prelude::KnockoutStage::find()
            .filter(entity::knockout_stage::Column::TournamentId.eq(tournament_id))
            .order_by_asc(entity::knockout_stage::Column::Position)
            .all(self.db)
            .await
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn create_knockout_stage(
        &self,
        tournament_id: i32,
        key: &str,
        label: &str,
        required_matches: i32,
        position: i32,
        enabled: bool,
        auto_seed: bool,
    ) -> Result<entity::knockout_stage::Model, DbErr> {
        let stage = entity::knockout_stage::ActiveModel {
            tournament_id: ActiveValue::Set(tournament_id),
            key: ActiveValue::Set(key.to_string()),
            label: ActiveValue::Set(label.to_string()),
            required_matches: ActiveValue::Set(required_matches),
            position: ActiveValue::Set(position),
            enabled: ActiveValue::Set(enabled),
            auto_seed: ActiveValue::Set(auto_seed),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        stage.insert(self.db).await
    }
}
