pub use sea_orm_migration::prelude::*;

mod m20250131_000001_people;
mod m20250131_000002_planet;
mod m20250131_000003_starship;
mod m20250131_000004_user;
mod m20250131_000005_favorite;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250131_000001_people::Migration),
            Box::new(m20250131_000002_planet::Migration),
            Box::new(m20250131_000003_starship::Migration),
            Box::new(m20250131_000004_user::Migration),
            Box::new(m20250131_000005_favorite::Migration),
        ]
    }
}
