use sea_orm_migration::prelude::*;

use crate::{
    m20260801_000002_create_character_table::Character, m20260801_000003_create_planet_table::Planet,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let characters = Query::insert()
            .into_table(Character::Table)
            .columns([
                Character::Name,
                Character::Surname,
                Character::Gender,
                Character::IsFavorite,
            ])
            .values_panic(["Luke".into(), "Skywalker".into(), "male".into(), false.into()])
            .values_panic(["Leia".into(), "Organa".into(), "female".into(), false.into()])
            .values_panic(["Darth".into(), "Vader".into(), "male".into(), false.into()])
            .values_panic(["Han".into(), "Solo".into(), "male".into(), false.into()])
            .values_panic([
                "Obi-Wan".into(),
                "Kenobi".into(),
                "male".into(),
                false.into(),
            ])
            .values_panic([
                "Padme".into(),
                "Amidala".into(),
                "female".into(),
                false.into(),
            ])
            .to_owned();

        manager.exec_stmt(characters).await?;

        let planets = Query::insert()
            .into_table(Planet::Table)
            .columns([
                Planet::Name,
                Planet::Climate,
                Planet::Population,
                Planet::IsFavorite,
            ])
            .values_panic([
                "Tatooine".into(),
                "arid".into(),
                200_000_i64.into(),
                false.into(),
            ])
            .values_panic([
                "Alderaan".into(),
                "temperate".into(),
                2_000_000_000_i64.into(),
                false.into(),
            ])
            .values_panic([
                "Hoth".into(),
                "frozen".into(),
                None::<i64>.into(),
                false.into(),
            ])
            .values_panic([
                "Dagobah".into(),
                "murky".into(),
                None::<i64>.into(),
                false.into(),
            ])
            .values_panic([
                "Naboo".into(),
                "temperate".into(),
                4_500_000_000_i64.into(),
                false.into(),
            ])
            .values_panic([
                "Coruscant".into(),
                "temperate".into(),
                1_000_000_000_000_i64.into(),
                false.into(),
            ])
            .to_owned();

        manager.exec_stmt(planets).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Reference tables are owned by the seed; clearing them reverses it.
        manager
            .exec_stmt(Query::delete().from_table(Character::Table).to_owned())
            .await?;

        manager
            .exec_stmt(Query::delete().from_table(Planet::Table).to_owned())
            .await?;

        Ok(())
    }
}
