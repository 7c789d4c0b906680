//! JSON-embedded value types shared across entities and the service layer.
//!
//! These types are stored inside JSON columns (`player.past_matches`,
//! `player.stats`, `tournament_match.lineup_a`/`lineup_b`,
//! `champion.key_players`) and round-trip through sea-orm via
//! [`FromJsonQueryResult`].

use chrono::NaiveDateTime;
use sea_orm::FromJsonQueryResult;
use serde::{Deserialize, Serialize};

/// One player's raw ball-by-ball totals inside a match lineup.
///
/// Lineup documents are produced by the live scoring collaborator and have
/// accumulated several legacy field names over time; the `alias` attributes
/// are the single ordered-fallback resolver for those names. All numeric
/// fields default to 0 and are kept as `f64` so malformed or absent values
/// degrade to 0 instead of failing the decode.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LineupEntry {
    #[serde(default, alias = "playerId")]
    pub player_id: Option<i32>,
    #[serde(default, alias = "playerName")]
    pub name: String,
    #[serde(default, alias = "runsScored", alias = "runs_scored")]
    pub runs: f64,
    #[serde(default, alias = "ballsFaced", alias = "balls_faced")]
    pub balls: f64,
    #[serde(default)]
    pub fours: f64,
    #[serde(default)]
    pub sixes: f64,
    #[serde(default, alias = "wicketsTaken", alias = "wickets_taken")]
    pub wickets: f64,
    #[serde(default, alias = "ballsBowled", alias = "oversBowledBalls")]
    pub balls_bowled: f64,
    #[serde(default, alias = "runsConceded", alias = "runs_given")]
    pub runs_conceded: f64,
    #[serde(default, alias = "isOut", alias = "out")]
    pub dismissed: bool,
    #[serde(default, alias = "battingPosition")]
    pub batting_position: Option<i32>,
    #[serde(default, alias = "isCaptain")]
    pub is_captain: bool,
    #[serde(default, alias = "isKeeper", alias = "isWicketKeeper")]
    pub is_keeper: bool,
}

/// A match lineup as stored on a match record.
#[derive(
    Clone, Debug, Default, PartialEq, Serialize, Deserialize, FromJsonQueryResult,
)]
pub struct Lineup(pub Vec<LineupEntry>);

/// Outcome of a match from one squad's point of view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchResult {
    Won,
    Lost,
    #[default]
    Tied,
}

/// One player's derived performance in one finished match.
///
/// Immutable once computed for a given match+player pair; a re-sync replaces
/// the entry in place rather than appending a duplicate.
#[derive(
    Clone, Debug, Default, PartialEq, Serialize, Deserialize, FromJsonQueryResult,
)]
pub struct PlayerMatchSummary {
    pub match_id: i32,
    pub tournament_id: i32,
    pub opponent_squad_id: Option<i32>,
    pub opponent: String,
    pub venue: Option<String>,
    pub match_date: Option<NaiveDateTime>,
    pub runs: i32,
    pub balls: i32,
    pub fours: i32,
    pub sixes: i32,
    pub strike_rate: f64,
    pub batted: bool,
    pub not_out: bool,
    pub dismissed: bool,
    pub batting_position: Option<i32>,
    pub wickets: i32,
    pub balls_bowled: i32,
    pub runs_conceded: i32,
    pub economy: f64,
    pub bowled: bool,
    pub result: MatchResult,
    pub is_captain: bool,
    pub is_keeper: bool,
}

/// A player's per-match history, keyed by match id (at most one entry per
/// match).
#[derive(
    Clone, Debug, Default, PartialEq, Serialize, Deserialize, FromJsonQueryResult,
)]
pub struct MatchHistory(pub Vec<PlayerMatchSummary>);

impl MatchHistory {
    pub fn contains_match(&self, match_id: i32) -> bool {
        self.0.iter().any(|entry| entry.match_id == match_id)
    }

    /// Replaces the entry with the same match id, or appends if absent.
    pub fn upsert(&mut self, summary: PlayerMatchSummary) {
        match self
            .0
            .iter_mut()
            .find(|entry| entry.match_id == summary.match_id)
        {
            Some(entry) => *entry = summary,
            None => self.0.push(summary),
        }
    }

    /// Removes the entry for the given match id, if present.
    pub fn remove_match(&mut self, match_id: i32) {
        self.0.retain(|entry| entry.match_id != match_id);
    }
}

/// Rolled-up career totals on a player record, recomputed from the full
/// match history on every sync.
///
/// `bowling_average` uses `f64::INFINITY` as a sentinel when runs were
/// conceded without taking a wicket; callers must special-case it for
/// display and sorting.
#[derive(
    Clone, Debug, Default, PartialEq, Serialize, Deserialize, FromJsonQueryResult,
)]
pub struct CareerTotals {
    pub matches: i32,
    pub runs: i32,
    pub balls: i32,
    pub fours: i32,
    pub sixes: i32,
    pub batting_innings: i32,
    pub not_outs: i32,
    pub dismissals: i32,
    pub fifties: i32,
    pub hundreds: i32,
    pub highest_score: i32,
    pub batting_average: f64,
    pub strike_rate: f64,
    pub wickets: i32,
    pub balls_bowled: i32,
    pub runs_conceded: i32,
    pub bowling_innings: i32,
    pub economy: f64,
    pub bowling_average: f64,
    pub bowling_strike_rate: f64,
    pub wins: i32,
    pub losses: i32,
    pub ties: i32,
}

/// A key contributor on the championship-winning squad.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct KeyPlayer {
    pub name: String,
    pub role: Option<String>,
    pub runs: i32,
    pub wickets: i32,
}

/// The champion record's ranked list of key players.
#[derive(
    Clone, Debug, Default, PartialEq, Serialize, Deserialize, FromJsonQueryResult,
)]
pub struct KeyPlayers(pub Vec<KeyPlayer>);
