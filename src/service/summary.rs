//! Pure per-player match summary construction.
//!
//! This is the leaf of both pipelines: the career aggregator folds these
//! summaries into player records, and standings read the same match fields.
//! Everything here is a total function of its inputs — no side effects, no
//! store access, and malformed numeric input degrades to zero instead of
//! raising.

use chrono::NaiveDateTime;

use entity::tournament_match;
use entity::types::{LineupEntry, MatchResult, PlayerMatchSummary};

use crate::util::numeric::{fin, round2};

/// Identifying context for the summary: which squad the player belonged to
/// in this match and how the opponent should be displayed.
pub struct SummaryContext<'a> {
    pub tournament_id: i32,
    pub squad_id: i32,
    pub opponent_squad_id: Option<i32>,
    pub opponent: &'a str,
    pub venue: Option<&'a str>,
    pub match_date: Option<NaiveDateTime>,
}

/// Outcome of a match from the given squad's point of view.
///
/// Explicit winner/loser identifiers on the record take precedence; without
/// them the two sides' runs are compared (equal runs is a tie). A squad id
/// matching neither side resolves to `Tied`.
pub fn match_result_for_squad(
    record: &tournament_match::Model,
    squad_id: i32,
) -> MatchResult {
    if record.winner_squad_id == Some(squad_id) {
        return MatchResult::Won;
    }
    if record.loser_squad_id == Some(squad_id) {
        return MatchResult::Lost;
    }
    if record.winner_squad_id.is_some() || record.loser_squad_id.is_some() {
        return MatchResult::Tied;
    }

    let (own_runs, other_runs) = if squad_id == record.squad_a_id {
        (record.squad_a_runs, record.squad_b_runs)
    } else if squad_id == record.squad_b_id {
        (record.squad_b_runs, record.squad_a_runs)
    } else {
        return MatchResult::Tied;
    };

    match own_runs.cmp(&other_runs) {
        std::cmp::Ordering::Greater => MatchResult::Won,
        std::cmp::Ordering::Less => MatchResult::Lost,
        std::cmp::Ordering::Equal => MatchResult::Tied,
    }
}

/// Builds one player's derived summary for one finished match.
///
/// Callable any number of times with identical output for identical input.
/// `batted` is true when the player faced a ball or was dismissed (the
/// latter covers a run-out off zero balls); `not_out` only when the player
/// batted and survived.
pub fn build_player_match_summary(
    entry: &LineupEntry,
    record: &tournament_match::Model,
    context: &SummaryContext,
) -> PlayerMatchSummary {
    let runs = fin(entry.runs);
    let balls = fin(entry.balls);
    let fours = fin(entry.fours);
    let sixes = fin(entry.sixes);
    let wickets = fin(entry.wickets);
    let balls_bowled = fin(entry.balls_bowled);
    let runs_conceded = fin(entry.runs_conceded);

    let strike_rate = if balls > 0.0 {
        round2(runs / balls * 100.0)
    } else {
        0.0
    };
    let economy = if balls_bowled > 0.0 {
        round2(runs_conceded / (balls_bowled / 6.0))
    } else {
        0.0
    };

    let batted = balls > 0.0 || entry.dismissed;
    let bowled = balls_bowled > 0.0;

    PlayerMatchSummary {
        match_id: record.id,
        tournament_id: context.tournament_id,
        opponent_squad_id: context.opponent_squad_id,
        opponent: context.opponent.to_string(),
        venue: context.venue.map(str::to_string),
        match_date: context.match_date,
        runs: runs as i32,
        balls: balls as i32,
        fours: fours as i32,
        sixes: sixes as i32,
        strike_rate,
        batted,
        not_out: batted && !entry.dismissed,
        dismissed: entry.dismissed,
        batting_position: entry.batting_position,
        wickets: wickets as i32,
        balls_bowled: balls_bowled as i32,
        runs_conceded: runs_conceded as i32,
        economy,
        bowled,
        result: match_result_for_squad(record, context.squad_id),
        is_captain: entry.is_captain,
        is_keeper: entry.is_keeper,
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use entity::tournament_match::MatchStatus;
    use entity::types::Lineup;

    use super::*;

    fn finished_match(squad_a_runs: i32, squad_b_runs: i32) -> tournament_match::Model {
        let now = Utc::now().naive_utc();

        tournament_match::Model {
            id: 1,
            tournament_id: 1,
            squad_a_id: 10,
            squad_b_id: 20,
            stage: None,
            status: MatchStatus::Finished,
            squad_a_runs,
            squad_a_wickets: 4,
            squad_a_balls: Some(120),
            squad_a_overs: None,
            squad_b_runs,
            squad_b_wickets: 6,
            squad_b_balls: Some(120),
            squad_b_overs: None,
            lineup_a: Lineup::default(),
            lineup_b: Lineup::default(),
            winner_squad_id: None,
            loser_squad_id: None,
            bracket_order: None,
            is_final: false,
            champion_recorded: false,
            venue: None,
            scheduled_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    fn context(record: &tournament_match::Model, squad_id: i32) -> SummaryContext<'static> {
        SummaryContext {
            tournament_id: record.tournament_id,
            squad_id,
            opponent_squad_id: Some(20),
            opponent: "Strikers",
            venue: None,
            match_date: None,
        }
    }

    #[test]
    fn strike_rate_and_economy_guard_division_by_zero() {
        let record = finished_match(150, 140);
        let entry = LineupEntry {
            runs: 0.0,
            balls: 0.0,
            balls_bowled: 0.0,
            runs_conceded: 0.0,
            ..Default::default()
        };

        let summary = build_player_match_summary(&entry, &record, &context(&record, 10));
        assert_eq!(summary.strike_rate, 0.0);
        assert_eq!(summary.economy, 0.0);
        assert!(!summary.batted);
        assert!(!summary.bowled);
        assert!(!summary.not_out);
    }

    #[test]
    fn derived_rates_round_to_two_decimals() {
        let record = finished_match(150, 140);
        let entry = LineupEntry {
            runs: 40.0,
            balls: 30.0,
            wickets: 2.0,
            balls_bowled: 24.0,
            runs_conceded: 31.0,
            ..Default::default()
        };

        let summary = build_player_match_summary(&entry, &record, &context(&record, 10));
        assert_eq!(summary.strike_rate, 133.33);
        assert_eq!(summary.economy, 7.75);
        assert!(summary.batted);
        assert!(summary.bowled);
    }

    #[test]
    fn run_out_on_zero_balls_counts_as_batted() {
        let record = finished_match(150, 140);
        let entry = LineupEntry {
            runs: 0.0,
            balls: 0.0,
            dismissed: true,
            ..Default::default()
        };

        let summary = build_player_match_summary(&entry, &record, &context(&record, 10));
        assert!(summary.batted);
        assert!(summary.dismissed);
        assert!(!summary.not_out);
    }

    #[test]
    fn non_finite_input_coerces_to_zero() {
        let record = finished_match(150, 140);
        let entry = LineupEntry {
            runs: f64::NAN,
            balls: f64::INFINITY,
            runs_conceded: f64::NEG_INFINITY,
            balls_bowled: 6.0,
            ..Default::default()
        };

        let summary = build_player_match_summary(&entry, &record, &context(&record, 10));
        assert_eq!(summary.runs, 0);
        assert_eq!(summary.balls, 0);
        assert_eq!(summary.runs_conceded, 0);
        assert_eq!(summary.strike_rate, 0.0);
        assert_eq!(summary.economy, 0.0);
    }

    #[test]
    fn result_prefers_explicit_winner_and_loser_ids() {
        let mut record = finished_match(100, 100);
        record.winner_squad_id = Some(20);
        record.loser_squad_id = Some(10);

        assert_eq!(match_result_for_squad(&record, 20), MatchResult::Won);
        assert_eq!(match_result_for_squad(&record, 10), MatchResult::Lost);
        // Unmatched squad id resolves to a tie rather than guessing.
        assert_eq!(match_result_for_squad(&record, 99), MatchResult::Tied);
    }

    #[test]
    fn result_falls_back_to_run_comparison() {
        let record = finished_match(150, 140);
        assert_eq!(match_result_for_squad(&record, 10), MatchResult::Won);
        assert_eq!(match_result_for_squad(&record, 20), MatchResult::Lost);

        let tied = finished_match(140, 140);
        assert_eq!(match_result_for_squad(&tied, 10), MatchResult::Tied);
        assert_eq!(match_result_for_squad(&tied, 99), MatchResult::Tied);
    }
}
