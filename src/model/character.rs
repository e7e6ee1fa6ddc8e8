use serde::{Deserialize, Serialize};

/// Serialized character reference data
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CharacterDto {
    pub id: i32,
    pub name: String,
    pub surname: String,
    pub gender: Option<String>,
}

impl From<entity::character::Model> for CharacterDto {
    fn from(character: entity::character::Model) -> Self {
        Self {
            id: character.id,
            name: character.name,
            surname: character.surname,
            gender: character.gender,
        }
    }
}
