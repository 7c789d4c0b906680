pub use super::champion::Entity as Champion;
pub use super::knockout_stage::Entity as KnockoutStage;
pub use super::player::Entity as Player;
pub use super::squad::Entity as Squad;
pub use super::tournament::Entity as Tournament;
pub use super::tournament_group::Entity as TournamentGroup;
pub use super::tournament_match::Entity as TournamentMatch;
