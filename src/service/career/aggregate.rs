use entity::types::{CareerTotals, MatchResult, PlayerMatchSummary};

use crate::util::numeric::round2;

/// Folds a player's match summaries into career totals.
///
/// Single linear pass for the running sums and counters; the derived rates
/// are computed afterwards from the folded totals only, never incrementally
/// per call, so repeated syncs cannot drift.
///
/// Conventions carried by the derived block:
/// - `batting_average` with no dismissals but runs scored is the run total
///   itself (the not-out convention).
/// - `bowling_average` with runs conceded but no wicket is
///   `f64::INFINITY` — a deliberate sentinel for "undefined", not an
///   error; callers special-case it for display and sorting.
pub fn aggregate_career_stats(summaries: &[PlayerMatchSummary]) -> CareerTotals {
    let mut totals = CareerTotals::default();

    for summary in summaries {
        totals.matches += 1;
        totals.runs += summary.runs;
        totals.balls += summary.balls;
        totals.fours += summary.fours;
        totals.sixes += summary.sixes;
        totals.wickets += summary.wickets;
        totals.balls_bowled += summary.balls_bowled;
        totals.runs_conceded += summary.runs_conceded;

        if summary.batted {
            totals.batting_innings += 1;

            if summary.not_out {
                totals.not_outs += 1;
            } else {
                totals.dismissals += 1;
            }
        }

        if summary.bowled {
            totals.bowling_innings += 1;
        }

        if summary.runs >= 100 {
            totals.hundreds += 1;
        } else if summary.runs >= 50 {
            totals.fifties += 1;
        }

        if summary.runs > totals.highest_score {
            totals.highest_score = summary.runs;
        }

        match summary.result {
            MatchResult::Won => totals.wins += 1,
            MatchResult::Lost => totals.losses += 1,
            MatchResult::Tied => totals.ties += 1,
        }
    }

    totals.strike_rate = if totals.balls > 0 {
        round2(totals.runs as f64 / totals.balls as f64 * 100.0)
    } else {
        0.0
    };

    totals.batting_average = if totals.dismissals > 0 {
        round2(totals.runs as f64 / totals.dismissals as f64)
    } else if totals.batting_innings > 0 && totals.runs > 0 {
        totals.runs as f64
    } else {
        0.0
    };

    totals.economy = if totals.balls_bowled > 0 {
        round2(totals.runs_conceded as f64 / (totals.balls_bowled as f64 / 6.0))
    } else {
        0.0
    };

    totals.bowling_average = if totals.wickets > 0 {
        round2(totals.runs_conceded as f64 / totals.wickets as f64)
    } else if totals.runs_conceded > 0 {
        f64::INFINITY
    } else {
        0.0
    };

    totals.bowling_strike_rate = if totals.wickets > 0 {
        round2(totals.balls_bowled as f64 / totals.wickets as f64)
    } else {
        0.0
    };

    totals
}
