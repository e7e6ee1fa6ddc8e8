use axum::{extract::State, http::StatusCode, response::IntoResponse};

use crate::{
    model::{api::ErrorDto, user::UserDto},
    server::{data::user::UserRepository, error::Error, model::app::AppState},
};

pub static USER_TAG: &str = "user";

/// Get all user accounts
#[utoipa::path(
    get,
    path = "/users",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Success when retrieving users", body = Vec<UserDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let user_repository = UserRepository::new(&state.db);

    let users = user_repository.get_all().await?;

    let user_dtos: Vec<UserDto> = users.into_iter().map(UserDto::from).collect();

    Ok((StatusCode::OK, axum::Json(user_dtos)).into_response())
}
