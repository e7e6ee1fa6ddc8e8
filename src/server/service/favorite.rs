use entity::favorite::FavoriteKind;
use sea_orm::ConnectionTrait;

use crate::{
    model::favorite::FavoriteDto,
    server::{
        data::{
            character::CharacterRepository, favorite::FavoriteRepository,
            planet::PlanetRepository,
        },
        error::Error,
    },
};

pub struct FavoriteService<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FavoriteService<'a, C> {
    /// Creates a new instance of [`FavoriteService`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets all favorites for a user with each target entity fully resolved
    ///
    /// Resolution is a two-step join: fetch the favorite rows, then look up
    /// each row's target entity by its kind. Every returned entry embeds the
    /// full serialized target, never a bare id. A row referencing a missing
    /// entity, or whose kind disagrees with its populated columns, is
    /// reported as an internal error; well-formed rows always resolve
    /// because reference data is never deleted.
    pub async fn get_user_favorites(&self, user_id: i32) -> Result<Vec<FavoriteDto>, Error> {
        let favorite_repository = FavoriteRepository::new(self.db);
        let character_repository = CharacterRepository::new(self.db);
        let planet_repository = PlanetRepository::new(self.db);

        let favorites = favorite_repository.get_many_by_user_id(user_id).await?;

        let mut favorites_list = Vec::with_capacity(favorites.len());

        for favorite in favorites {
            let dto = match (
                &favorite.favorite_kind,
                favorite.planet_id,
                favorite.character_id,
            ) {
                (FavoriteKind::Planet, Some(planet_id), _) => {
                    let planet =
                        planet_repository
                            .get_by_id(planet_id)
                            .await?
                            .ok_or_else(|| {
                                Error::InternalError(format!(
                                    "favorite {} references missing planet {}",
                                    favorite.id, planet_id
                                ))
                            })?;

                    FavoriteDto::Planet(planet.into())
                }
                (FavoriteKind::Character, _, Some(character_id)) => {
                    let character = character_repository
                        .get_by_id(character_id)
                        .await?
                        .ok_or_else(|| {
                            Error::InternalError(format!(
                                "favorite {} references missing character {}",
                                favorite.id, character_id
                            ))
                        })?;

                    FavoriteDto::Character(character.into())
                }
                _ => {
                    return Err(Error::InternalError(format!(
                        "favorite {} has a kind inconsistent with its target columns",
                        favorite.id
                    )))
                }
            };

            favorites_list.push(dto);
        }

        Ok(favorites_list)
    }
}
