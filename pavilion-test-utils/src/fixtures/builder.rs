//! Declarative match-record builder for engine tests.
//!
//! Finished-match documents are the engine's main input and tests need fine
//! control over scores, ball counts, lineups, and status. The builder
//! defaults to a finished group-stage match with zeroed scores; chain the
//! setters for anything else and finish with [`MatchBuilder::insert`].

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection};

use entity::tournament_match::{MatchStage, MatchStatus};
use entity::types::{Lineup, LineupEntry};

use crate::error::TestError;

pub struct MatchBuilder {
    tournament_id: i32,
    squad_a_id: i32,
    squad_b_id: i32,
    stage: Option<MatchStage>,
    status: MatchStatus,
    squad_a_runs: i32,
    squad_a_wickets: i32,
    squad_a_balls: Option<i32>,
    squad_a_overs: Option<String>,
    squad_b_runs: i32,
    squad_b_wickets: i32,
    squad_b_balls: Option<i32>,
    squad_b_overs: Option<String>,
    lineup_a: Lineup,
    lineup_b: Lineup,
    winner_squad_id: Option<i32>,
    loser_squad_id: Option<i32>,
    venue: Option<String>,
}

impl MatchBuilder {
    pub fn new(tournament_id: i32, squad_a_id: i32, squad_b_id: i32) -> Self {
        Self {
            tournament_id,
            squad_a_id,
            squad_b_id,
            stage: None,
            status: MatchStatus::Finished,
            squad_a_runs: 0,
            squad_a_wickets: 0,
            squad_a_balls: None,
            squad_a_overs: None,
            squad_b_runs: 0,
            squad_b_wickets: 0,
            squad_b_balls: None,
            squad_b_overs: None,
            lineup_a: Lineup::default(),
            lineup_b: Lineup::default(),
            winner_squad_id: None,
            loser_squad_id: None,
            venue: None,
        }
    }

    pub fn stage(mut self, stage: MatchStage) -> Self {
        self.stage = Some(stage);
        self
    }

    pub fn status(mut self, status: MatchStatus) -> Self {
        self.status = status;
        self
    }

    pub fn score_a(mut self, runs: i32, wickets: i32) -> Self {
        self.squad_a_runs = runs;
        self.squad_a_wickets = wickets;
        self
    }

    pub fn score_b(mut self, runs: i32, wickets: i32) -> Self {
        self.squad_b_runs = runs;
        self.squad_b_wickets = wickets;
        self
    }

    pub fn balls(mut self, squad_a_balls: i32, squad_b_balls: i32) -> Self {
        self.squad_a_balls = Some(squad_a_balls);
        self.squad_b_balls = Some(squad_b_balls);
        self
    }

    pub fn overs(mut self, squad_a_overs: &str, squad_b_overs: &str) -> Self {
        self.squad_a_overs = Some(squad_a_overs.to_string());
        self.squad_b_overs = Some(squad_b_overs.to_string());
        self
    }

    pub fn lineup_a(mut self, entries: Vec<LineupEntry>) -> Self {
        self.lineup_a = Lineup(entries);
        self
    }

    pub fn lineup_b(mut self, entries: Vec<LineupEntry>) -> Self {
        self.lineup_b = Lineup(entries);
        self
    }

    pub fn winner(mut self, winner_squad_id: i32, loser_squad_id: i32) -> Self {
        self.winner_squad_id = Some(winner_squad_id);
        self.loser_squad_id = Some(loser_squad_id);
        self
    }

    pub fn venue(mut self, venue: &str) -> Self {
        self.venue = Some(venue.to_string());
        self
    }

    pub async fn insert(
        self,
        db: &DatabaseConnection,
    ) -> Result<entity::tournament_match::Model, TestError> {
        let row = entity::tournament_match::ActiveModel {
            tournament_id: ActiveValue::Set(self.tournament_id),
            squad_a_id: ActiveValue::Set(self.squad_a_id),
            squad_b_id: ActiveValue::Set(self.squad_b_id),
            stage: ActiveValue::Set(self.stage),
            status: ActiveValue::Set(self.status),
            squad_a_runs: ActiveValue::Set(self.squad_a_runs),
            squad_a_wickets: ActiveValue::Set(self.squad_a_wickets),
            squad_a_balls: ActiveValue::Set(self.squad_a_balls),
            squad_a_overs: ActiveValue::Set(self.squad_a_overs),
            squad_b_runs: ActiveValue::Set(self.squad_b_runs),
            squad_b_wickets: ActiveValue::Set(self.squad_b_wickets),
            squad_b_balls: ActiveValue::Set(self.squad_b_balls),
            squad_b_overs: ActiveValue::Set(self.squad_b_overs),
            lineup_a: ActiveValue::Set(self.lineup_a),
            lineup_b: ActiveValue::Set(self.lineup_b),
            winner_squad_id: ActiveValue::Set(self.winner_squad_id),
            loser_squad_id: ActiveValue::Set(self.loser_squad_id),
            bracket_order: ActiveValue::Set(None),
            is_final: ActiveValue::Set(self.stage == Some(MatchStage::Final)),
            champion_recorded: ActiveValue::Set(false),
            venue: ActiveValue::Set(self.venue),
            scheduled_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        Ok(row.insert(db).await?)
    }
}
