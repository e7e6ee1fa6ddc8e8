use serde::{Deserialize, Serialize};

/// Serialized user account.
///
/// Only the id and email are ever exposed; `username`, `password`, and
/// `is_active` have no corresponding fields here so they cannot leak.
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub email: String,
}

impl From<entity::user::Model> for UserDto {
    fn from(user: entity::user::Model) -> Self {
        Self {
            id: user.id,
            email: user.email,
        }
    }
}
