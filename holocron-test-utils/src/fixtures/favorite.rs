use entity::favorite::FavoriteKind;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn favorite(&self) -> FavoriteFixtures<'_> {
        FavoriteFixtures { context: self }
    }
}

/// Insertion helpers for favorite association rows.
///
/// Rows are written directly, bypassing the application repository, so tests
/// can also construct states the repository would never produce.
pub struct FavoriteFixtures<'a> {
    context: &'a TestContext,
}

impl FavoriteFixtures<'_> {
    pub async fn insert_planet_favorite(
        &self,
        user_id: Option<i32>,
        planet_id: i32,
    ) -> Result<entity::favorite::Model, TestError> {
        Ok(
            entity::prelude::Favorite::insert(entity::favorite::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                favorite_kind: ActiveValue::Set(FavoriteKind::Planet),
                planet_id: ActiveValue::Set(Some(planet_id)),
                character_id: ActiveValue::Set(None),
                ..Default::default()
            })
            .exec_with_returning(&self.context.db)
            .await?,
        )
    }

    pub async fn insert_character_favorite(
        &self,
        user_id: Option<i32>,
        character_id: i32,
    ) -> Result<entity::favorite::Model, TestError> {
        Ok(
            entity::prelude::Favorite::insert(entity::favorite::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                favorite_kind: ActiveValue::Set(FavoriteKind::Character),
                character_id: ActiveValue::Set(Some(character_id)),
                planet_id: ActiveValue::Set(None),
                ..Default::default()
            })
            .exec_with_returning(&self.context.db)
            .await?,
        )
    }
}
