use entity::tournament::TournamentStatus;
use entity::tournament_match::{MatchStage, MatchStatus};

use crate::data::{
    champion::ChampionRepository, tournament::TournamentRepository,
    tournament_match::MatchRepository,
};

use super::*;

async fn setup() -> Result<TestSetup, TestError> {
    test_setup_with_tables!(
        entity::prelude::Tournament,
        entity::prelude::TournamentGroup,
        entity::prelude::Squad,
        entity::prelude::Player,
        entity::prelude::TournamentMatch,
        entity::prelude::Champion,
    )
}

/// A settled final writes the champion record, stamps the match, and
/// completes the tournament
#[tokio::test]
async fn records_champion_for_settled_final() -> Result<(), TestError> {
    let test = setup().await?;

    let tournament = factory::insert_tournament(&test.db, "Winter Cup").await?;
    let thunder = factory::insert_squad(&test.db, tournament.id, None, "Thunder").await?;
    let strikers = factory::insert_squad(&test.db, tournament.id, None, "Strikers").await?;

    let mut opener = factory::lineup_entry(None, "R. Sharma");
    opener.runs = 88.0;
    let mut allrounder = factory::lineup_entry(None, "H. Pandya");
    allrounder.runs = 20.0;
    allrounder.wickets = 2.0;

    let record = MatchBuilder::new(tournament.id, thunder.id, strikers.id)
        .stage(MatchStage::Final)
        .score_a(172, 5)
        .score_b(160, 9)
        .lineup_a(vec![opener, allrounder])
        .insert(&test.db)
        .await?;

    let champion_service = ChampionService::new(&test.db);
    let champion = champion_service
        .record_champion_if_needed(record.id)
        .await
        .unwrap()
        .expect("champion should be recorded");

    assert_eq!(champion.tournament_id, tournament.id);
    assert_eq!(champion.winner_squad_id, thunder.id);
    assert_eq!(champion.runner_up_squad_id, strikers.id);
    assert_eq!(champion.result_summary, "Thunder won by 12 runs");
    assert_eq!(
        champion.final_match_summary,
        "Thunder 172/5 beat Strikers 160/9 by 12 runs"
    );

    let match_repo = MatchRepository::new(&test.db);
    let stamped = match_repo.get(record.id).await?.unwrap();
    assert!(stamped.champion_recorded);
    assert_eq!(stamped.winner_squad_id, Some(thunder.id));
    assert_eq!(stamped.loser_squad_id, Some(strikers.id));

    let tournament_repo = TournamentRepository::new(&test.db);
    let completed = tournament_repo.get(tournament.id).await?.unwrap();
    assert_eq!(completed.status, TournamentStatus::Completed);

    Ok(())
}

/// Key players rank by runs + wickets * 10, keep contributors only, and
/// cap at five
#[tokio::test]
async fn key_players_ranked_by_weighted_score() -> Result<(), TestError> {
    let test = setup().await?;

    let tournament = factory::insert_tournament(&test.db, "Winter Cup").await?;
    let thunder = factory::insert_squad(&test.db, tournament.id, None, "Thunder").await?;
    let strikers = factory::insert_squad(&test.db, tournament.id, None, "Strikers").await?;
    let spinner =
        factory::insert_player(&test.db, Some(thunder.id), "R. Jadeja").await?;

    // Registered role should surface on the key-player projection.
    {
        use sea_orm::{ActiveModelTrait, ActiveValue, IntoActiveModel};

        let mut spinner_am = spinner.clone().into_active_model();
        spinner_am.role = ActiveValue::Set(Some("All-rounder".to_string()));
        spinner_am.update(&test.db).await?;
    }

    let entries = vec![
        {
            let mut e = factory::lineup_entry(None, "Opener");
            e.runs = 45.0;
            e
        },
        {
            // 15 + 3*10 = 45, tying the opener; equal scores keep lineup
            // order so the opener stays ahead.
            let mut e = factory::lineup_entry(Some(spinner.id), "R. Jadeja");
            e.runs = 15.0;
            e.wickets = 3.0;
            e
        },
        {
            let mut e = factory::lineup_entry(None, "Finisher");
            e.runs = 50.0;
            e
        },
        {
            let mut e = factory::lineup_entry(None, "Specialist");
            e.wickets = 1.0;
            e
        },
        {
            let mut e = factory::lineup_entry(None, "Anchor");
            e.runs = 12.0;
            e
        },
        {
            let mut e = factory::lineup_entry(None, "Keeper");
            e.runs = 8.0;
            e
        },
        // No contribution at all: filtered out entirely.
        factory::lineup_entry(None, "Tailender"),
    ];

    let record = MatchBuilder::new(tournament.id, thunder.id, strikers.id)
        .stage(MatchStage::Final)
        .score_a(150, 6)
        .score_b(130, 10)
        .lineup_a(entries)
        .insert(&test.db)
        .await?;

    let champion_service = ChampionService::new(&test.db);
    let champion = champion_service
        .record_champion_if_needed(record.id)
        .await
        .unwrap()
        .unwrap();

    let names: Vec<&str> = champion
        .key_players
        .0
        .iter()
        .map(|p| p.name.as_str())
        .collect();
    assert_eq!(names, vec!["Finisher", "Opener", "R. Jadeja", "Anchor", "Specialist"]);

    let jadeja = &champion.key_players.0[2];
    assert_eq!(jadeja.role.as_deref(), Some("All-rounder"));
    assert_eq!(jadeja.runs, 15);
    assert_eq!(jadeja.wickets, 3);

    Ok(())
}

/// A tied final records nothing and is left for manual resolution
#[tokio::test]
async fn tied_final_records_nothing() -> Result<(), TestError> {
    let test = setup().await?;

    let tournament = factory::insert_tournament(&test.db, "Winter Cup").await?;
    let thunder = factory::insert_squad(&test.db, tournament.id, None, "Thunder").await?;
    let strikers = factory::insert_squad(&test.db, tournament.id, None, "Strikers").await?;

    let record = MatchBuilder::new(tournament.id, thunder.id, strikers.id)
        .stage(MatchStage::Final)
        .score_a(150, 6)
        .score_b(150, 8)
        .insert(&test.db)
        .await?;

    let champion_service = ChampionService::new(&test.db);
    let result = champion_service.record_champion_if_needed(record.id).await.unwrap();
    assert!(result.is_none());

    let champion_repo = ChampionRepository::new(&test.db);
    assert!(champion_repo.get_by_tournament_id(tournament.id).await?.is_none());

    let match_repo = MatchRepository::new(&test.db);
    let untouched = match_repo.get(record.id).await?.unwrap();
    assert!(!untouched.champion_recorded);

    Ok(())
}

/// Group matches and unsettled finals are no-ops
#[tokio::test]
async fn no_op_outside_settled_finals() -> Result<(), TestError> {
    let test = setup().await?;

    let tournament = factory::insert_tournament(&test.db, "Winter Cup").await?;
    let thunder = factory::insert_squad(&test.db, tournament.id, None, "Thunder").await?;
    let strikers = factory::insert_squad(&test.db, tournament.id, None, "Strikers").await?;

    let group_match = MatchBuilder::new(tournament.id, thunder.id, strikers.id)
        .stage(MatchStage::Group)
        .score_a(150, 4)
        .score_b(140, 8)
        .insert(&test.db)
        .await?;

    let live_final = MatchBuilder::new(tournament.id, thunder.id, strikers.id)
        .stage(MatchStage::Final)
        .status(MatchStatus::Live)
        .score_a(90, 2)
        .score_b(0, 0)
        .insert(&test.db)
        .await?;

    let champion_service = ChampionService::new(&test.db);
    assert!(champion_service
        .record_champion_if_needed(group_match.id)
        .await
        .unwrap()
        .is_none());
    assert!(champion_service
        .record_champion_if_needed(live_final.id)
        .await
        .unwrap()
        .is_none());

    Ok(())
}

/// A second status-change callback after recording is a no-op
#[tokio::test]
async fn second_call_is_no_op() -> Result<(), TestError> {
    let test = setup().await?;

    let tournament = factory::insert_tournament(&test.db, "Winter Cup").await?;
    let thunder = factory::insert_squad(&test.db, tournament.id, None, "Thunder").await?;
    let strikers = factory::insert_squad(&test.db, tournament.id, None, "Strikers").await?;

    let record = MatchBuilder::new(tournament.id, thunder.id, strikers.id)
        .stage(MatchStage::Final)
        .score_a(150, 6)
        .score_b(130, 10)
        .insert(&test.db)
        .await?;

    let champion_service = ChampionService::new(&test.db);

    let first = champion_service.record_champion_if_needed(record.id).await.unwrap();
    assert!(first.is_some());

    let second = champion_service.record_champion_if_needed(record.id).await.unwrap();
    assert!(second.is_none());

    Ok(())
}
