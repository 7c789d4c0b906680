use chrono::Utc;
use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    sea_query::OnConflict,
};

use entity::types::KeyPlayers;

/// Fields written when a tournament's final outcome is recorded.
pub struct ChampionEntry {
    pub tournament_id: i32,
    pub winner_squad_id: i32,
    pub runner_up_squad_id: i32,
    pub result_summary: String,
    pub final_match_summary: String,
    pub key_players: KeyPlayers,
}

pub struct ChampionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ChampionRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates the champion record for a tournament, overwriting any
    /// existing record for the same tournament (recording the same final
    /// twice is idempotent on identical inputs).
    pub async fn upsert(
        &self,
        entry: ChampionEntry,
    ) -> Result<entity::champion::Model, DbErr> {
        let champion = entity::champion::ActiveModel {
            tournament_id: ActiveValue::Set(entry.tournament_id),
            winner_squad_id: ActiveValue::Set(entry.winner_squad_id),
            runner_up_squad_id: ActiveValue::Set(entry.runner_up_squad_id),
            result_summary: ActiveValue::Set(entry.result_summary),
            final_match_summary: ActiveValue::Set(entry.final_match_summary),
            key_players: ActiveValue::Set(entry.key_players),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        entity::prelude::Champion::insert(champion)
            .on_conflict(
                OnConflict::column(entity::champion::Column::TournamentId)
                    .update_columns([
                        entity::champion::Column::WinnerSquadId,
                        entity::champion::Column::RunnerUpSquadId,
                        entity::champion::Column::ResultSummary,
                        entity::champion::Column::FinalMatchSummary,
                        entity::champion::Column::KeyPlayers,
                        entity::champion::Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec_with_returning(self.db)
            .await
    }

    pub async fn get_by_tournament_id(
        &self,
        tournament_id: i32,
    ) -> Result<Option<entity::champion::Model>, DbErr> {
        entity::prelude::Champion::find()
            .filter(entity::champion::Column::TournamentId.eq(tournament_id))
            .one(self.db)
            .await
    }
}
