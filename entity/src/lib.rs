pub mod champion;
pub mod knockout_stage;
pub mod player;
pub mod prelude;
pub mod squad;
pub mod tournament;
pub mod tournament_group;
pub mod tournament_match;
pub mod types;
