use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

use entity::types::{CareerTotals, MatchHistory, PlayerMatchSummary};

/// Repository for player records.
///
/// Generic over the connection so the career service can run its scoped
/// read-modify-write against an open transaction (`DatabaseTransaction`)
/// while reads elsewhere use the shared connection.
pub struct PlayerRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PlayerRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Registers a player with an empty match history and zero totals.
    pub async fn create(
        &self,
        squad_id: Option<i32>,
        name: &str,
        role: Option<String>,
    ) -> Result<entity::player::Model, DbErr> {
        let player = entity::player::ActiveModel {
            squad_id: ActiveValue::Set(squad_id),
            name: ActiveValue::Set(name.to_string()),
            role: ActiveValue::Set(role),
            past_matches: ActiveValue::Set(MatchHistory::default()),
            stats: ActiveValue::Set(CareerTotals::default()),
            last_match_summary: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        player.insert(self.db).await
    }

    pub async fn get(&self, id: i32) -> Result<Option<entity::player::Model>, DbErr> {
        entity::prelude::Player::find_by_id(id).one(self.db).await
    }

    pub async fn get_many_by_squad(
        &self,
        squad_id: i32,
    ) -> Result<Vec<entity::player::Model>, DbErr> {
        entity::prelude::Player::find()
            .filter(entity::player::Column::SquadId.eq(squad_id))
            .all(self.db)
            .await
    }

    /// Full player scan, used by the match-deletion reversal to find every
    /// record whose history references a match id.
    pub async fn get_all(&self) -> Result<Vec<entity::player::Model>, DbErr> {
        entity::prelude::Player::find().all(self.db).await
    }

    /// Writes a player's match history, recomputed totals, and last-match
    /// summary as one update. Callers run this inside the per-player
    /// transaction so no concurrent writer can interleave between the read
    /// and this write.
    pub async fn update_match_stats(
        &self,
        id: i32,
        past_matches: MatchHistory,
        stats: CareerTotals,
        last_match_summary: Option<PlayerMatchSummary>,
    ) -> Result<entity::player::Model, DbErr> {
        let player = entity::player::ActiveModel {
            id: ActiveValue::Unchanged(id),
            past_matches: ActiveValue::Set(past_matches),
            stats: ActiveValue::Set(stats),
            last_match_summary: ActiveValue::Set(last_match_summary),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        player.update(self.db).await
    }
}

#[cfg(test)]
mod tests {
    use pavilion_test_utils::prelude::*;

    use super::*;

    /// Registration should start a player with zero totals and no history
    #[tokio::test]
    async fn create_player_with_zero_totals() -> Result<(), TestError> {
        let test = test_setup_with_tables!(
            entity::prelude::Squad,
            entity::prelude::Player,
        )?;

        let player_repo = PlayerRepository::new(&test.db);

        let player = player_repo
            .create(None, "R. Sharma", Some("Batter".to_string()))
            .await?;

        assert_eq!(player.stats, CareerTotals::default());
        assert!(player.past_matches.0.is_empty());
        assert_eq!(player.last_match_summary, None);

        Ok(())
    }

    /// History, totals, and last summary should persist as one write
    #[tokio::test]
    async fn update_match_stats_round_trip() -> Result<(), TestError> {
        let test = test_setup_with_tables!(
            entity::prelude::Squad,
            entity::prelude::Player,
        )?;

        let player_repo = PlayerRepository::new(&test.db);
        let player = player_repo.create(None, "R. Sharma", None).await?;

        let summary = PlayerMatchSummary {
            match_id: 7,
            runs: 52,
            balls: 40,
            batted: true,
            ..Default::default()
        };
        let mut history = MatchHistory::default();
        history.upsert(summary.clone());

        let totals = CareerTotals {
            matches: 1,
            runs: 52,
            balls: 40,
            batting_innings: 1,
            fifties: 1,
            highest_score: 52,
            ..Default::default()
        };

        player_repo
            .update_match_stats(player.id, history.clone(), totals.clone(), Some(summary))
            .await?;

        let fetched = player_repo.get(player.id).await?.unwrap();
        assert_eq!(fetched.past_matches, history);
        assert_eq!(fetched.stats, totals);
        assert_eq!(fetched.last_match_summary.map(|s| s.match_id), Some(7));

        Ok(())
    }
}
