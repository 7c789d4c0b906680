use thiserror::Error;

/// Errors raised by the tournament progression pipeline.
///
/// The reference-not-found variants are used when the record an operation is
/// rooted at does not exist; references that go missing mid-batch (a player
/// named in a lineup, a squad named in a match) are skipped with a warning
/// instead so the rest of the batch completes.
#[derive(Error, Debug)]
pub enum TournamentError {
    /// No tournament record exists with this ID.
    #[error("Tournament with ID {0} not found")]
    TournamentNotFound(i32),
    /// No match record exists with this ID.
    #[error("Match with ID {0} not found")]
    MatchNotFound(i32),
    /// No squad record exists with this ID.
    #[error("Squad with ID {0} not found")]
    SquadNotFound(i32),
    /// Statistics were requested for a match that has not been completed.
    #[error("Match with ID {0} is not completed; statistics are only aggregated for completed matches")]
    MatchNotAggregatable(i32),
    /// The tournament has no group definitions to compute standings from.
    #[error("Tournament with ID {0} has no groups configured")]
    GroupsNotConfigured(i32),
    /// The tournament has no knockout stage definition to seed.
    #[error("Tournament with ID {0} has no knockout stage configured")]
    KnockoutNotConfigured(i32),
    /// A stage definition carries a key that is not a known match stage.
    #[error("Unknown stage name '{0}'")]
    UnknownStage(String),
    /// The knockout stage exists but is disabled.
    #[error("Knockout stage '{0}' is disabled for this tournament")]
    KnockoutDisabled(String),
    /// The knockout stage exists but automatic seeding is turned off.
    #[error("Automatic seeding is disabled for knockout stage '{0}'")]
    AutoSeedDisabled(String),
    /// The group stage did not produce enough qualifiers to fill the
    /// knockout bracket. No fixtures are created or modified.
    #[error("Knockout stage '{stage}' requires {required} qualifiers but only {available} are available")]
    InsufficientQualifiers {
        /// Key of the stage being seeded.
        stage: String,
        /// Qualifiers needed to fill the bracket (`required_matches * 2`).
        required: usize,
        /// Qualifiers actually produced by the group stage.
        available: usize,
    },
}
