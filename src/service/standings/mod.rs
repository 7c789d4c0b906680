//! Group-stage standings with the net-run-rate tie-break.
//!
//! Standings are transient: recomputed from scratch from the current squad
//! and match state on every call, never persisted. The computation only
//! reads, holds no shared mutable state, and is deterministic for a given
//! input set, so it is safe to invoke concurrently any number of times.

#[cfg(test)]
mod tests;

use std::cmp::Ordering;
use std::collections::HashMap;

use sea_orm::DatabaseConnection;
use serde::Serialize;

use crate::{
    data::{
        squad::SquadRepository, tournament::TournamentRepository,
        tournament_match::MatchRepository,
    },
    error::{tournament::TournamentError, Error},
    util::{numeric::round3, overs::overs_to_balls},
};

/// One squad's accumulated group-stage record.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TeamStanding {
    pub squad_id: i32,
    pub squad_name: String,
    pub group_key: String,
    pub group_name: String,
    pub matches: i32,
    pub wins: i32,
    pub losses: i32,
    pub ties: i32,
    pub points: i32,
    pub runs_for: i32,
    pub runs_against: i32,
    pub balls_faced: i32,
    pub balls_bowled: i32,
    pub net_run_rate: f64,
}

/// A group's ranked table.
#[derive(Clone, Debug, Serialize)]
pub struct GroupTable {
    pub key: String,
    pub name: String,
    pub standings: Vec<TeamStanding>,
}

/// A squad advancing from its group, tagged with its rank position
/// (1-based) within the group.
#[derive(Clone, Debug, Serialize)]
pub struct Qualifier {
    pub standing: TeamStanding,
    pub position: i32,
}

/// Output of one standings computation.
#[derive(Clone, Debug, Serialize)]
pub struct GroupStandings {
    /// Ranked tables in group definition order.
    pub standings_by_group: Vec<GroupTable>,
    /// Advancing squads, interleaved by rank position then group order, so
    /// the front of the list holds each group's table-toppers.
    pub qualifiers: Vec<Qualifier>,
}

pub struct StandingsService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StandingsService<'a> {
    /// Creates a new instance of [`StandingsService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Computes ranked tables and qualifiers for a tournament's group
    /// stage from its settled group matches.
    ///
    /// Ranking within a group: points descending, then net run rate
    /// descending, then squad name ascending. Head-to-head results are
    /// deliberately not part of the cascade.
    pub async fn compute_group_standings(
        &self,
        tournament_id: i32,
    ) -> Result<GroupStandings, Error> {
        let tournament_repo = TournamentRepository::new(self.db);

        tournament_repo
            .get(tournament_id)
            .await?
            .ok_or(TournamentError::TournamentNotFound(tournament_id))?;

        let groups = tournament_repo.get_groups(tournament_id).await?;
        if groups.is_empty() {
            return Err(TournamentError::GroupsNotConfigured(tournament_id).into());
        }

        let squads = SquadRepository::new(self.db)
            .get_many_by_tournament(tournament_id)
            .await?;
        let matches = MatchRepository::new(self.db)
            .get_finished_group_matches(tournament_id)
            .await?;

        let mut table: HashMap<i32, TeamStanding> = HashMap::new();

        for squad in &squads {
            let Some(group_id) = squad.group_id else {
                tracing::warn!(
                    squad_id = squad.id,
                    "Squad has no group assignment; excluded from standings"
                );
                continue;
            };

            let Some(group) = groups.iter().find(|group| group.id == group_id) else {
                tracing::warn!(
                    squad_id = squad.id,
                    group_id = group_id,
                    "Squad references a group outside this tournament; excluded from standings"
                );
                continue;
            };

            table.insert(
                squad.id,
                TeamStanding {
                    squad_id: squad.id,
                    squad_name: squad.name.clone(),
                    group_key: group.key.clone(),
                    group_name: group.name.clone(),
                    matches: 0,
                    wins: 0,
                    losses: 0,
                    ties: 0,
                    points: 0,
                    runs_for: 0,
                    runs_against: 0,
                    balls_faced: 0,
                    balls_bowled: 0,
                    net_run_rate: 0.0,
                },
            );
        }

        for record in &matches {
            let a_balls = side_balls(record.squad_a_balls, record.squad_a_overs.as_deref());
            let b_balls = side_balls(record.squad_b_balls, record.squad_b_overs.as_deref());

            let sides = [
                (record.squad_a_id, record.squad_a_runs, a_balls, record.squad_b_runs, b_balls),
                (record.squad_b_id, record.squad_b_runs, b_balls, record.squad_a_runs, a_balls),
            ];

            for (squad_id, own_runs, own_balls, other_runs, other_balls) in sides {
                let Some(standing) = table.get_mut(&squad_id) else {
                    tracing::warn!(
                        match_id = record.id,
                        squad_id = squad_id,
                        "Match references a squad outside the group tables; side skipped"
                    );
                    continue;
                };

                standing.matches += 1;
                standing.runs_for += own_runs;
                standing.runs_against += other_runs;
                standing.balls_faced += own_balls;
                standing.balls_bowled += other_balls;

                match own_runs.cmp(&other_runs) {
                    Ordering::Greater => {
                        standing.wins += 1;
                        standing.points += 2;
                    }
                    Ordering::Less => {
                        standing.losses += 1;
                    }
                    Ordering::Equal => {
                        standing.ties += 1;
                        standing.points += 1;
                    }
                }
            }
        }

        for standing in table.values_mut() {
            let overs_faced = standing.balls_faced as f64 / 6.0;
            let overs_bowled = standing.balls_bowled as f64 / 6.0;

            let scored_rate = if overs_faced > 0.0 {
                standing.runs_for as f64 / overs_faced
            } else {
                0.0
            };
            let conceded_rate = if overs_bowled > 0.0 {
                standing.runs_against as f64 / overs_bowled
            } else {
                0.0
            };

            standing.net_run_rate = round3(scored_rate - conceded_rate);
        }

        let mut standings_by_group = Vec::with_capacity(groups.len());
        let mut qualifiers = Vec::new();

        for group in &groups {
            let mut standings: Vec<TeamStanding> = table
                .values()
                .filter(|standing| standing.group_key == group.key)
                .cloned()
                .collect();

            standings.sort_by(rank_ordering);

            let slots = group.qualifier_slots.max(1) as usize;
            for (index, standing) in standings.iter().take(slots).enumerate() {
                qualifiers.push(Qualifier {
                    standing: standing.clone(),
                    position: index as i32 + 1,
                });
            }

            standings_by_group.push(GroupTable {
                key: group.key.clone(),
                name: group.name.clone(),
                standings,
            });
        }

        // Stable sort: equal positions keep group definition order, which
        // interleaves each group's rank-1 squads at the front.
        qualifiers.sort_by_key(|qualifier| qualifier.position);

        Ok(GroupStandings {
            standings_by_group,
            qualifiers,
        })
    }
}

/// Ball count for one side, falling back to the overs string when no raw
/// count was recorded.
fn side_balls(balls: Option<i32>, overs: Option<&str>) -> i32 {
    match balls {
        Some(balls) => balls,
        None => overs.map(overs_to_balls).unwrap_or(0),
    }
}

fn rank_ordering(a: &TeamStanding, b: &TeamStanding) -> Ordering {
    b.points
        .cmp(&a.points)
        .then_with(|| {
            b.net_run_rate
                .partial_cmp(&a.net_run_rate)
                .unwrap_or(Ordering::Equal)
        })
        .then_with(|| a.squad_name.cmp(&b.squad_name))
}
