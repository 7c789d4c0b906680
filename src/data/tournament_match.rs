use chrono::{NaiveDateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use entity::tournament_match::{MatchStage, MatchStatus};
use entity::types::Lineup;

/// Fields an administrator provides when scheduling a match. Scores and
/// lineups start zeroed and are filled in by the live scoring collaborator.
pub struct NewMatch {
    pub tournament_id: i32,
    pub squad_a_id: i32,
    pub squad_b_id: i32,
    pub stage: Option<MatchStage>,
    pub venue: Option<String>,
    pub scheduled_at: Option<NaiveDateTime>,
}

impl NewMatch {
    pub fn new(tournament_id: i32, squad_a_id: i32, squad_b_id: i32) -> Self {
        Self {
            tournament_id,
            squad_a_id,
            squad_b_id,
            stage: None,
            venue: None,
            scheduled_at: None,
        }
    }
}

/// Repository for match records, including the knockout fixture slots the
/// seeder reconciles.
///
/// Generic over the connection so the seeder's create/overwrite/delete
/// reconciliation can run as one transaction.
pub struct MatchRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MatchRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        new_match: NewMatch,
    ) -> Result<entity::tournament_match::Model, DbErr> {
        let is_final = new_match.stage == Some(MatchStage::Final);

        let row = entity::tournament_match::ActiveModel {
            tournament_id: ActiveValue::Set(new_match.tournament_id),
            squad_a_id: ActiveValue::Set(new_match.squad_a_id),
            squad_b_id: ActiveValue::Set(new_match.squad_b_id),
            stage: ActiveValue::Set(new_match.stage),
            status: ActiveValue::Set(MatchStatus::Upcoming),
            squad_a_runs: ActiveValue::Set(0),
            squad_a_wickets: ActiveValue::Set(0),
            squad_a_balls: ActiveValue::Set(None),
            squad_a_overs: ActiveValue::Set(None),
            squad_b_runs: ActiveValue::Set(0),
            squad_b_wickets: ActiveValue::Set(0),
            squad_b_balls: ActiveValue::Set(None),
            squad_b_overs: ActiveValue::Set(None),
            lineup_a: ActiveValue::Set(Lineup::default()),
            lineup_b: ActiveValue::Set(Lineup::default()),
            winner_squad_id: ActiveValue::Set(None),
            loser_squad_id: ActiveValue::Set(None),
            bracket_order: ActiveValue::Set(None),
            is_final: ActiveValue::Set(is_final),
            champion_recorded: ActiveValue::Set(false),
            venue: ActiveValue::Set(new_match.venue),
            scheduled_at: ActiveValue::Set(new_match.scheduled_at),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        row.insert(self.db).await
    }

    pub async fn get(
        &self,
        id: i32,
    ) -> Result<Option<entity::tournament_match::Model>, DbErr> {
        entity::prelude::TournamentMatch::find_by_id(id).one(self.db).await
    }

    /// Group-stage matches eligible for standings: settled status, and stage
    /// `group` or unset (legacy matches predate the stage column).
    pub async fn get_finished_group_matches(
        &self,
        tournament_id: i32,
    ) -> Result<Vec<entity::tournament_match::Model>, DbErr> {
        entity::prelude::TournamentMatch::find()
            .filter(entity::tournament_match::Column::TournamentId.eq(tournament_id))
            .filter(
                entity::tournament_match::Column::Status
                    .is_in([MatchStatus::Completed, MatchStatus::Finished]),
            )
            .filter(
                Condition::any()
                    .add(entity::tournament_match::Column::Stage.is_null())
                    .add(entity::tournament_match::Column::Stage.eq(MatchStage::Group)),
            )
            .all(self.db)
            .await
    }

    /// Fixture rows for one knockout stage, in creation order (the slot
    /// order the seeder reconciles against).
    pub async fn get_by_stage(
        &self,
        tournament_id: i32,
        stage: MatchStage,
    ) -> Result<Vec<entity::tournament_match::Model>, DbErr> {
        entity::prelude::TournamentMatch::find()
            .filter(entity::tournament_match::Column::TournamentId.eq(tournament_id))
            .filter(entity::tournament_match::Column::Stage.eq(stage))
            .order_by_asc(entity::tournament_match::Column::CreatedAt)
            .order_by_asc(entity::tournament_match::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn update_status(&self, id: i32, status: MatchStatus) -> Result<(), DbErr> {
        let row = entity::tournament_match::ActiveModel {
            id: ActiveValue::Unchanged(id),
            status: ActiveValue::Set(status),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        row.update(self.db).await?;

        Ok(())
    }

    /// Stamps the champion-recorded flag and winner/loser ids after the
    /// champion recorder has resolved a final.
    pub async fn update_result_flags(
        &self,
        id: i32,
        winner_squad_id: i32,
        loser_squad_id: i32,
    ) -> Result<(), DbErr> {
        let row = entity::tournament_match::ActiveModel {
            id: ActiveValue::Unchanged(id),
            winner_squad_id: ActiveValue::Set(Some(winner_squad_id)),
            loser_squad_id: ActiveValue::Set(Some(loser_squad_id)),
            champion_recorded: ActiveValue::Set(true),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        row.update(self.db).await?;

        Ok(())
    }

    /// Inserts a fresh fixture row for a pairing slot.
    pub async fn create_fixture_slot(
        &self,
        tournament_id: i32,
        stage: MatchStage,
        bracket_order: i32,
        squad_a_id: i32,
        squad_b_id: i32,
    ) -> Result<entity::tournament_match::Model, DbErr> {
        let row = entity::tournament_match::ActiveModel {
            tournament_id: ActiveValue::Set(tournament_id),
            squad_a_id: ActiveValue::Set(squad_a_id),
            squad_b_id: ActiveValue::Set(squad_b_id),
            stage: ActiveValue::Set(Some(stage)),
            status: ActiveValue::Set(MatchStatus::Upcoming),
            squad_a_runs: ActiveValue::Set(0),
            squad_a_wickets: ActiveValue::Set(0),
            squad_a_balls: ActiveValue::Set(None),
            squad_a_overs: ActiveValue::Set(None),
            squad_b_runs: ActiveValue::Set(0),
            squad_b_wickets: ActiveValue::Set(0),
            squad_b_balls: ActiveValue::Set(None),
            squad_b_overs: ActiveValue::Set(None),
            lineup_a: ActiveValue::Set(Lineup::default()),
            lineup_b: ActiveValue::Set(Lineup::default()),
            winner_squad_id: ActiveValue::Set(None),
            loser_squad_id: ActiveValue::Set(None),
            bracket_order: ActiveValue::Set(Some(bracket_order)),
            is_final: ActiveValue::Set(stage == MatchStage::Final),
            champion_recorded: ActiveValue::Set(false),
            venue: ActiveValue::Set(None),
            scheduled_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        row.insert(self.db).await
    }

    /// Re-points an existing fixture row at a new pairing, resetting scores
    /// and status while preserving the row identity and creation timestamp.
    pub async fn overwrite_fixture_slot(
        &self,
        id: i32,
        stage: MatchStage,
        bracket_order: i32,
        squad_a_id: i32,
        squad_b_id: i32,
    ) -> Result<entity::tournament_match::Model, DbErr> {
        let row = entity::tournament_match::ActiveModel {
            id: ActiveValue::Unchanged(id),
            squad_a_id: ActiveValue::Set(squad_a_id),
            squad_b_id: ActiveValue::Set(squad_b_id),
            stage: ActiveValue::Set(Some(stage)),
            status: ActiveValue::Set(MatchStatus::Upcoming),
            squad_a_runs: ActiveValue::Set(0),
            squad_a_wickets: ActiveValue::Set(0),
            squad_a_balls: ActiveValue::Set(None),
            squad_a_overs: ActiveValue::Set(None),
            squad_b_runs: ActiveValue::Set(0),
            squad_b_wickets: ActiveValue::Set(0),
            squad_b_balls: ActiveValue::Set(None),
            squad_b_overs: ActiveValue::Set(None),
            lineup_a: ActiveValue::Set(Lineup::default()),
            lineup_b: ActiveValue::Set(Lineup::default()),
            winner_squad_id: ActiveValue::Set(None),
            loser_squad_id: ActiveValue::Set(None),
            bracket_order: ActiveValue::Set(Some(bracket_order)),
            is_final: ActiveValue::Set(stage == MatchStage::Final),
            champion_recorded: ActiveValue::Set(false),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        row.update(self.db).await
    }

    /// Deletes surplus fixture rows left over from a previous seeding.
    pub async fn delete_many(&self, ids: Vec<i32>) -> Result<(), DbErr> {
        if ids.is_empty() {
            return Ok(());
        }

        entity::prelude::TournamentMatch::delete_many()
            .filter(entity::tournament_match::Column::Id.is_in(ids))
            .exec(self.db)
            .await?;

        Ok(())
    }
}
