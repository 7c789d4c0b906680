//! Career aggregation: folds per-match summaries into durable player
//! records.
//!
//! Every mutation here is a scoped transactional read-modify-write against
//! exactly one player row, wrapped in a [`RetryContext`] so concurrent sync
//! calls racing on the same player serialize instead of losing updates.
//! There is no cross-player atomicity: a multi-player sync is a sequence of
//! independent single-row transactions, so partial progress is visible,
//! safe, and resumable (the whole operation is idempotent).

#[cfg(test)]
mod tests;

mod aggregate;

pub use aggregate::aggregate_career_stats;

use sea_orm::{DatabaseConnection, DbErr, TransactionTrait};

use entity::types::PlayerMatchSummary;

use crate::{
    data::{
        player::PlayerRepository, squad::SquadRepository, tournament_match::MatchRepository,
    },
    error::{tournament::TournamentError, Error},
    service::{
        retry::RetryContext,
        summary::{build_player_match_summary, SummaryContext},
    },
};

pub struct CareerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CareerService<'a> {
    /// Creates a new instance of [`CareerService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Upserts one match summary into every lineup player's career record.
    ///
    /// Idempotent: the summary replaces any existing history entry with the
    /// same match id, so re-running the sync after a re-score converges to
    /// the same state instead of double counting. A lineup entry whose
    /// player record no longer exists is skipped with a warning and the
    /// rest of the lineup continues.
    pub async fn sync_player_stats_for_match(&self, match_id: i32) -> Result<(), Error> {
        let match_repo = MatchRepository::new(self.db);
        let record = match_repo
            .get(match_id)
            .await?
            .ok_or(TournamentError::MatchNotFound(match_id))?;

        if !record.status.is_settled() {
            return Err(TournamentError::MatchNotAggregatable(match_id).into());
        }

        let squad_repo = SquadRepository::new(self.db);
        let squad_a = squad_repo.get(record.squad_a_id).await?;
        let squad_b = squad_repo.get(record.squad_b_id).await?;

        let sides = [
            (record.squad_a_id, &record.lineup_a, record.squad_b_id, &squad_b),
            (record.squad_b_id, &record.lineup_b, record.squad_a_id, &squad_a),
        ];

        for (squad_id, lineup, opponent_id, opponent) in sides {
            let opponent_name = opponent
                .as_ref()
                .map(|squad| squad.name.as_str())
                .unwrap_or("Unknown");

            let context = SummaryContext {
                tournament_id: record.tournament_id,
                squad_id,
                opponent_squad_id: Some(opponent_id),
                opponent: opponent_name,
                venue: record.venue.as_deref(),
                match_date: record.scheduled_at,
            };

            for entry in &lineup.0 {
                let Some(player_id) = entry.player_id else {
                    continue;
                };

                let summary = build_player_match_summary(entry, &record, &context);
                self.apply_summary(player_id, summary).await?;
            }
        }

        Ok(())
    }

    /// Removes a deleted match from every player history that references it
    /// and recomputes totals from the remaining matches.
    ///
    /// Each affected player is an independent single-row transaction; a
    /// crash mid-sweep leaves already-processed players correctly updated
    /// and the sweep can simply be re-run.
    pub async fn remove_match_stats_from_players(&self, match_id: i32) -> Result<(), Error> {
        let player_repo = PlayerRepository::new(self.db);
        let players = player_repo.get_all().await?;

        for player in players {
            if !player.past_matches.contains_match(match_id) {
                continue;
            }

            self.remove_summary(player.id, match_id).await?;
        }

        Ok(())
    }

    /// Replace-or-append one summary on one player record, transactionally.
    async fn apply_summary(
        &self,
        player_id: i32,
        summary: PlayerMatchSummary,
    ) -> Result<(), Error> {
        let retry = RetryContext::new();

        let updated = retry
            .execute_with_retry("player stats sync", || {
                let summary = summary.clone();

                async move {
                    self.db
                        .transaction::<_, bool, DbErr>(move |txn| {
                            Box::pin(async move {
                                let player_repo = PlayerRepository::new(txn);

                                let Some(player) = player_repo.get(player_id).await? else {
                                    return Ok(false);
                                };

                                let mut history = player.past_matches;
                                history.upsert(summary.clone());

                                let totals = aggregate_career_stats(&history.0);

                                player_repo
                                    .update_match_stats(
                                        player.id,
                                        history,
                                        totals,
                                        Some(summary),
                                    )
                                    .await?;

                                Ok(true)
                            })
                        })
                        .await
                        .map_err(Error::from)
                }
            })
            .await?;

        if !updated {
            tracing::warn!(
                player_id = player_id,
                "Player record not found during stats sync; skipping"
            );
        }

        Ok(())
    }

    async fn remove_summary(&self, player_id: i32, match_id: i32) -> Result<(), Error> {
        let retry = RetryContext::new();

        retry
            .execute_with_retry("player stats removal", || async move {
                self.db
                    .transaction::<_, (), DbErr>(move |txn| {
                        Box::pin(async move {
                            let player_repo = PlayerRepository::new(txn);

                            let Some(player) = player_repo.get(player_id).await? else {
                                return Ok(());
                            };

                            let mut history = player.past_matches;
                            if !history.contains_match(match_id) {
                                return Ok(());
                            }

                            history.remove_match(match_id);

                            let totals = aggregate_career_stats(&history.0);
                            let last_match_summary = history.0.last().cloned();

                            player_repo
                                .update_match_stats(
                                    player.id,
                                    history,
                                    totals,
                                    last_match_summary,
                                )
                                .await?;

                            Ok(())
                        })
                    })
                    .await
                    .map_err(Error::from)
            })
            .await
    }
}
