pub use sea_orm_migration::prelude::*;

mod m20260115_000001_create_tournament_table;
mod m20260115_000002_create_tournament_group_table;
mod m20260115_000003_create_knockout_stage_table;
mod m20260115_000004_create_squad_table;
mod m20260115_000005_create_player_table;
mod m20260115_000006_create_tournament_match_table;
mod m20260115_000007_create_champion_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260115_000001_create_tournament_table::Migration),
            Box::new(m20260115_000002_create_tournament_group_table::Migration),
            Box::new(m20260115_000003_create_knockout_stage_table::Migration),
            Box::new(m20260115_000004_create_squad_table::Migration),
            Box::new(m20260115_000005_create_player_table::Migration),
            Box::new(m20260115_000006_create_tournament_match_table::Migration),
            Box::new(m20260115_000007_create_champion_table::Migration),
        ]
    }
}
