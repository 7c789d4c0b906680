//! One-time champion recording when a tournament's final settles.
//!
//! The three writes (champion record, match flags, tournament status) are
//! deliberately independent rather than one cross-record transaction: a
//! crash between them leaves the champion recorded with the match flag
//! unset, and the next status-change callback recomputes the identical
//! record and finishes the remaining writes. Self-healing beats a
//! distributed transaction here.

#[cfg(test)]
mod tests;

use sea_orm::DatabaseConnection;

use entity::tournament::TournamentStatus;
use entity::tournament_match::MatchStage;
use entity::types::{KeyPlayer, KeyPlayers, Lineup};

use crate::{
    data::{
        champion::{ChampionEntry, ChampionRepository},
        player::PlayerRepository,
        squad::SquadRepository,
        tournament::TournamentRepository,
        tournament_match::MatchRepository,
    },
    error::{tournament::TournamentError, Error},
    util::numeric::fin,
};

/// Weight applied to wickets when ranking key players against runs.
const WICKET_WEIGHT: i32 = 10;

/// How many key players a champion record carries.
const KEY_PLAYER_LIMIT: usize = 5;

pub struct ChampionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ChampionService<'a> {
    /// Creates a new instance of [`ChampionService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records the tournament champion if this match is a settled final
    /// that has not been recorded yet.
    ///
    /// Returns `None` without touching anything when the match is not a
    /// final, is not settled, was already recorded, or ended with level
    /// scores (a tied final is left for manual resolution). On success the
    /// champion record is written (idempotent per tournament), the match is
    /// stamped with winner/loser and the champion-recorded flag, and the
    /// tournament status flips to completed.
    pub async fn record_champion_if_needed(
        &self,
        match_id: i32,
    ) -> Result<Option<entity::champion::Model>, Error> {
        let match_repo = MatchRepository::new(self.db);

        let record = match_repo
            .get(match_id)
            .await?
            .ok_or(TournamentError::MatchNotFound(match_id))?;

        let is_final = record.is_final || record.stage == Some(MatchStage::Final);
        if !is_final || !record.status.is_settled() || record.champion_recorded {
            return Ok(None);
        }

        if record.squad_a_runs == record.squad_b_runs {
            tracing::info!(
                match_id = match_id,
                "Final ended with level scores; champion left for manual resolution"
            );
            return Ok(None);
        }

        let squad_a_won = record.squad_a_runs > record.squad_b_runs;
        let (winner_id, winner_runs, winner_wickets, winner_lineup) = if squad_a_won {
            (record.squad_a_id, record.squad_a_runs, record.squad_a_wickets, &record.lineup_a)
        } else {
            (record.squad_b_id, record.squad_b_runs, record.squad_b_wickets, &record.lineup_b)
        };
        let (loser_id, loser_runs, loser_wickets) = if squad_a_won {
            (record.squad_b_id, record.squad_b_runs, record.squad_b_wickets)
        } else {
            (record.squad_a_id, record.squad_a_runs, record.squad_a_wickets)
        };

        let squad_repo = SquadRepository::new(self.db);
        let winner = squad_repo
            .get(winner_id)
            .await?
            .ok_or(TournamentError::SquadNotFound(winner_id))?;
        let loser = squad_repo
            .get(loser_id)
            .await?
            .ok_or(TournamentError::SquadNotFound(loser_id))?;

        let key_players = self.rank_key_players(winner_lineup).await?;

        let margin = winner_runs - loser_runs;
        let margin_unit = if margin == 1 { "run" } else { "runs" };
        let result_summary = format!("{} won by {} {}", winner.name, margin, margin_unit);
        let final_match_summary = format!(
            "{} {}/{} beat {} {}/{} by {} {}",
            winner.name,
            winner_runs,
            winner_wickets,
            loser.name,
            loser_runs,
            loser_wickets,
            margin,
            margin_unit
        );

        let champion = ChampionRepository::new(self.db)
            .upsert(ChampionEntry {
                tournament_id: record.tournament_id,
                winner_squad_id: winner.id,
                runner_up_squad_id: loser.id,
                result_summary,
                final_match_summary,
                key_players,
            })
            .await?;

        match_repo
            .update_result_flags(record.id, winner.id, loser.id)
            .await?;

        TournamentRepository::new(self.db)
            .update_status(record.tournament_id, TournamentStatus::Completed)
            .await?;

        tracing::debug!(
            tournament_id = record.tournament_id,
            winner_squad_id = winner.id,
            "Champion recorded"
        );

        Ok(Some(champion))
    }

    /// Ranks the winning lineup by weighted contribution
    /// (`runs + wickets * 10`), drops players with no contribution, and
    /// projects the top entries with their registered role.
    async fn rank_key_players(&self, lineup: &Lineup) -> Result<KeyPlayers, Error> {
        let player_repo = PlayerRepository::new(self.db);

        let mut contributors: Vec<(i32, &entity::types::LineupEntry)> = lineup
            .0
            .iter()
            .filter_map(|entry| {
                let runs = fin(entry.runs) as i32;
                let wickets = fin(entry.wickets) as i32;
                let score = runs + wickets * WICKET_WEIGHT;

                (score > 0).then_some((score, entry))
            })
            .collect();

        contributors.sort_by(|a, b| b.0.cmp(&a.0));

        let mut key_players = Vec::new();
        for (_, entry) in contributors.into_iter().take(KEY_PLAYER_LIMIT) {
            let role = match entry.player_id {
                Some(player_id) => player_repo
                    .get(player_id)
                    .await?
                    .and_then(|player| player.role),
                None => None,
            };

            key_players.push(KeyPlayer {
                name: entry.name.clone(),
                role,
                runs: fin(entry.runs) as i32,
                wickets: fin(entry.wickets) as i32,
            });
        }

        Ok(KeyPlayers(key_players))
    }
}
