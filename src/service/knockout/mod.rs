//! Knockout bracket seeding from group-stage qualifiers.
//!
//! Seeding fails closed: configuration problems and insufficient qualifiers
//! reject the call before any write, and the fixture reconciliation itself
//! runs as one transaction so no caller ever observes a half-updated
//! bracket.

#[cfg(test)]
mod tests;

use sea_orm::{DatabaseConnection, DbErr, TransactionTrait};

use entity::tournament_match::MatchStage;

use crate::{
    data::{tournament::TournamentRepository, tournament_match::MatchRepository},
    error::{tournament::TournamentError, Error},
    service::standings::StandingsService,
};

pub struct KnockoutService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> KnockoutService<'a> {
    /// Creates a new instance of [`KnockoutService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Seeds the tournament's first knockout stage from the current group
    /// standings and returns the reconciled fixture rows in bracket order.
    ///
    /// Qualifiers are paired consecutively off the front of the ranked
    /// list — rank 1 vs rank 2, rank 3 vs rank 4 — independent of
    /// originating group. Existing fixture rows are reused slot-by-slot in
    /// creation order (preserving their identity and creation timestamp),
    /// missing slots are created, and surplus rows are deleted, all as one
    /// transaction; afterwards the stage's fixture count always equals the
    /// pairing count.
    pub async fn seed_knockout_stage(
        &self,
        tournament_id: i32,
    ) -> Result<Vec<entity::tournament_match::Model>, Error> {
        let tournament_repo = TournamentRepository::new(self.db);

        let stages = tournament_repo.get_knockout_stages(tournament_id).await?;
        let Some(stage) = stages.into_iter().next() else {
            return Err(TournamentError::KnockoutNotConfigured(tournament_id).into());
        };

        if !stage.enabled {
            return Err(TournamentError::KnockoutDisabled(stage.key).into());
        }
        if !stage.auto_seed {
            return Err(TournamentError::AutoSeedDisabled(stage.key).into());
        }

        let stage_key: MatchStage = stage
            .key
            .parse()
            .map_err(|_| TournamentError::UnknownStage(stage.key.clone()))?;

        let required = stage.required_matches.max(0) as usize;
        let needed = required * 2;

        let standings = StandingsService::new(self.db)
            .compute_group_standings(tournament_id)
            .await?;

        if standings.qualifiers.len() < needed {
            return Err(TournamentError::InsufficientQualifiers {
                stage: stage.key,
                required: needed,
                available: standings.qualifiers.len(),
            }
            .into());
        }

        let pairings: Vec<(i32, i32)> = standings.qualifiers[..needed]
            .chunks(2)
            .map(|pair| (pair[0].standing.squad_id, pair[1].standing.squad_id))
            .collect();

        let fixtures = self
            .db
            .transaction::<_, Vec<entity::tournament_match::Model>, DbErr>(move |txn| {
                Box::pin(async move {
                    let match_repo = MatchRepository::new(txn);

                    let existing = match_repo.get_by_stage(tournament_id, stage_key).await?;

                    let mut fixtures = Vec::with_capacity(pairings.len());
                    for (index, (squad_a_id, squad_b_id)) in pairings.iter().enumerate() {
                        let fixture = match existing.get(index) {
                            Some(slot) => {
                                match_repo
                                    .overwrite_fixture_slot(
                                        slot.id,
                                        stage_key,
                                        index as i32,
                                        *squad_a_id,
                                        *squad_b_id,
                                    )
                                    .await?
                            }
                            None => {
                                match_repo
                                    .create_fixture_slot(
                                        tournament_id,
                                        stage_key,
                                        index as i32,
                                        *squad_a_id,
                                        *squad_b_id,
                                    )
                                    .await?
                            }
                        };

                        fixtures.push(fixture);
                    }

                    let surplus: Vec<i32> = existing
                        .iter()
                        .skip(pairings.len())
                        .map(|slot| slot.id)
                        .collect();
                    match_repo.delete_many(surplus).await?;

                    Ok(fixtures)
                })
            })
            .await
            .map_err(Error::from)?;

        tracing::debug!(
            tournament_id = tournament_id,
            fixtures = fixtures.len(),
            "Knockout stage seeded"
        );

        Ok(fixtures)
    }
}
