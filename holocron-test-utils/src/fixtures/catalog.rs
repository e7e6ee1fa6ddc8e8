use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn catalog(&self) -> CatalogFixtures<'_> {
        CatalogFixtures { context: self }
    }
}

/// Insertion helpers for the read-only reference tables.
pub struct CatalogFixtures<'a> {
    context: &'a TestContext,
}

impl CatalogFixtures<'_> {
    pub async fn insert_character(
        &self,
        name: &str,
        surname: &str,
        gender: Option<&str>,
    ) -> Result<entity::character::Model, TestError> {
        Ok(
            entity::prelude::Character::insert(entity::character::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                surname: ActiveValue::Set(surname.to_string()),
                gender: ActiveValue::Set(gender.map(str::to_string)),
                is_favorite: ActiveValue::Set(Some(false)),
                ..Default::default()
            })
            .exec_with_returning(&self.context.db)
            .await?,
        )
    }

    pub async fn insert_planet(
        &self,
        name: &str,
        climate: Option<&str>,
        population: Option<i64>,
    ) -> Result<entity::planet::Model, TestError> {
        Ok(entity::prelude::Planet::insert(entity::planet::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            climate: ActiveValue::Set(climate.map(str::to_string)),
            population: ActiveValue::Set(population),
            is_favorite: ActiveValue::Set(Some(false)),
            ..Default::default()
        })
        .exec_with_returning(&self.context.db)
        .await?)
    }
}
