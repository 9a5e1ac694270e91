pub use sea_orm_migration::prelude::*;

mod m20251020_000001_create_user_table;
mod m20251020_000002_create_star_systems_table;
mod m20251020_000003_create_factions_table;
mod m20251020_000004_create_planets_table;
mod m20251020_000005_create_species_table;
mod m20251020_000006_create_characters_table;
mod m20251020_000007_create_user_favorites_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251020_000001_create_user_table::Migration),
            Box::new(m20251020_000002_create_star_systems_table::Migration),
            Box::new(m20251020_000003_create_factions_table::Migration),
            Box::new(m20251020_000004_create_planets_table::Migration),
            Box::new(m20251020_000005_create_species_table::Migration),
            Box::new(m20251020_000006_create_characters_table::Migration),
            Box::new(m20251020_000007_create_user_favorites_table::Migration),
        ]
    }
}
