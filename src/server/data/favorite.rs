use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

use crate::server::model::favorite::FavoriteTarget;

pub struct FavoriteRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FavoriteRepository<'a, C> {
    /// Creates a new instance of [`FavoriteRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new favorite association
    ///
    /// The target column and kind are both derived from `target`, so the row
    /// is always internally consistent. No existence check is performed on
    /// the user or the target id, and duplicate favorites simply create
    /// additional rows.
    pub async fn create(
        &self,
        user_id: Option<i32>,
        target: FavoriteTarget,
    ) -> Result<entity::favorite::Model, DbErr> {
        let (character_id, planet_id) = match target {
            FavoriteTarget::Planet(planet_id) => (None, Some(planet_id)),
            FavoriteTarget::Character(character_id) => (Some(character_id), None),
        };

        let favorite = entity::favorite::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            favorite_kind: ActiveValue::Set(target.kind()),
            character_id: ActiveValue::Set(character_id),
            planet_id: ActiveValue::Set(planet_id),
            ..Default::default()
        };

        favorite.insert(self.db).await
    }

    /// Gets all favorite rows for the provided user ID
    ///
    /// Rows come back in storage iteration order; no ordering is applied.
    pub async fn get_many_by_user_id(
        &self,
        user_id: i32,
    ) -> Result<Vec<entity::favorite::Model>, DbErr> {
        entity::prelude::Favorite::find()
            .filter(entity::favorite::Column::UserId.eq(user_id))
            .all(self.db)
            .await
    }

    /// Deletes the first favorite row matching the user and target
    ///
    /// Returns the deleted row, or `None` when no row matched. When
    /// duplicate rows exist, at most one is removed per call. A `None`
    /// user id matches rows whose user reference is null.
    pub async fn delete_by_user_and_target(
        &self,
        user_id: Option<i32>,
        target: FavoriteTarget,
    ) -> Result<Option<entity::favorite::Model>, DbErr> {
        let mut query = entity::prelude::Favorite::find()
            .filter(entity::favorite::Column::FavoriteKind.eq(target.kind()));

        query = match target {
            FavoriteTarget::Planet(planet_id) => {
                query.filter(entity::favorite::Column::PlanetId.eq(planet_id))
            }
            FavoriteTarget::Character(character_id) => {
                query.filter(entity::favorite::Column::CharacterId.eq(character_id))
            }
        };

        query = match user_id {
            Some(user_id) => query.filter(entity::favorite::Column::UserId.eq(user_id)),
            None => query.filter(entity::favorite::Column::UserId.is_null()),
        };

        let favorite = match query.one(self.db).await? {
            Some(favorite) => favorite,
            None => return Ok(None),
        };

        entity::prelude::Favorite::delete_by_id(favorite.id)
            .exec(self.db)
            .await?;

        Ok(Some(favorite))
    }
}
