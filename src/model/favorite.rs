use serde::{Deserialize, Serialize};

use crate::model::{character::CharacterDto, planet::PlanetDto};

/// A favorite entry with its target entity fully resolved.
///
/// Serializes as `{"type": "planet", "data": {...}}` or
/// `{"type": "character", "data": {...}}`.
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(tag = "type", content = "data", rename_all = "lowercase")]
pub enum FavoriteDto {
    Planet(PlanetDto),
    Character(CharacterDto),
}

/// Request body for adding or removing a favorite.
///
/// A missing `user_id` field deserializes to `None` and is stored or matched
/// as a null user reference rather than rejected.
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct FavoriteRequestDto {
    pub user_id: Option<i32>,
}
