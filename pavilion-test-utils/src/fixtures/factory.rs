//! Row factories for engine tests.
//!
//! Each function inserts one record with sensible test defaults and returns
//! the persisted model. Matches have their own dedicated builder
//! ([`crate::fixtures::MatchBuilder`]) because tests need fine control over
//! scores, lineups, and status.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection};

use entity::tournament::TournamentStatus;
use entity::types::{CareerTotals, LineupEntry, MatchHistory};

use crate::error::TestError;

pub async fn insert_tournament(
    db: &DatabaseConnection,
    name: &str,
) -> Result<entity::tournament::Model, TestError> {
    let tournament = entity::tournament::ActiveModel {
        name: ActiveValue::Set(name.to_string()),
        status: ActiveValue::Set(TournamentStatus::Ongoing),
        created_at: ActiveValue::Set(Utc::now().naive_utc()),
        updated_at: ActiveValue::Set(Utc::now().naive_utc()),
        ..Default::default()
    };

    Ok(tournament.insert(db).await?)
}

pub async fn insert_group(
    db: &DatabaseConnection,
    tournament_id: i32,
    key: &str,
    name: &str,
    qualifier_slots: i32,
) -> Result<entity::tournament_group::Model, TestError> {
    let group = entity::tournament_group::ActiveModel {
        tournament_id: ActiveValue::Set(tournament_id),
        key: ActiveValue::Set(key.to_string()),
        name: ActiveValue::Set(name.to_string()),
        qualifier_slots: ActiveValue::Set(qualifier_slots),
        created_at: ActiveValue::Set(Utc::now().naive_utc()),
        updated_at: ActiveValue::Set(Utc::now().naive_utc()),
        ..Default::default()
    };

    Ok(group.insert(db).await?)
}

pub async fn insert_knockout_stage(
    db: &DatabaseConnection,
    tournament_id: i32,
    key: &str,
    label: &str,
    required_matches: i32,
    position: i32,
    enabled: bool,
    auto_seed: bool,
) -> Result<entity::knockout_stage::Model, TestError> {
    let stage = entity::knockout_stage::ActiveModel {
        tournament_id: ActiveValue::Set(tournament_id),
        key: ActiveValue::Set(key.to_string()),
        label: ActiveValue::Set(label.to_string()),
        required_matches: ActiveValue::Set(required_matches),
        position: ActiveValue::Set(position),
        enabled: ActiveValue::Set(enabled),
        auto_seed: ActiveValue::Set(auto_seed),
        created_at: ActiveValue::Set(Utc::now().naive_utc()),
        updated_at: ActiveValue::Set(Utc::now().naive_utc()),
        ..Default::default()
    };

    Ok(stage.insert(db).await?)
}

pub async fn insert_squad(
    db: &DatabaseConnection,
    tournament_id: i32,
    group_id: Option<i32>,
    name: &str,
) -> Result<entity::squad::Model, TestError> {
    let squad = entity::squad::ActiveModel {
        tournament_id: ActiveValue::Set(tournament_id),
        group_id: ActiveValue::Set(group_id),
        name: ActiveValue::Set(name.to_string()),
        batch: ActiveValue::Set(None),
        created_at: ActiveValue::Set(Utc::now().naive_utc()),
        updated_at: ActiveValue::Set(Utc::now().naive_utc()),
        ..Default::default()
    };

    Ok(squad.insert(db).await?)
}

pub async fn insert_player(
    db: &DatabaseConnection,
    squad_id: Option<i32>,
    name: &str,
) -> Result<entity::player::Model, TestError> {
    let player = entity::player::ActiveModel {
        squad_id: ActiveValue::Set(squad_id),
        name: ActiveValue::Set(name.to_string()),
        role: ActiveValue::Set(None),
        past_matches: ActiveValue::Set(MatchHistory::default()),
        stats: ActiveValue::Set(CareerTotals::default()),
        last_match_summary: ActiveValue::Set(None),
        created_at: ActiveValue::Set(Utc::now().naive_utc()),
        updated_at: ActiveValue::Set(Utc::now().naive_utc()),
        ..Default::default()
    };

    Ok(player.insert(db).await?)
}

/// A zeroed lineup entry for the given player; tests fill in the fields
/// they care about.
pub fn lineup_entry(player_id: Option<i32>, name: &str) -> LineupEntry {
    LineupEntry {
        player_id,
        name: name.to_string(),
        ..Default::default()
    }
}
