use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::{
    model::{api::ErrorDto, character::CharacterDto},
    server::{data::character::CharacterRepository, error::Error, model::app::AppState},
};

pub static PEOPLE_TAG: &str = "people";

/// Get all characters in the reference dataset
#[utoipa::path(
    get,
    path = "/people",
    tag = PEOPLE_TAG,
    responses(
        (status = 200, description = "Success when retrieving characters", body = Vec<CharacterDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_people(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let character_repository = CharacterRepository::new(&state.db);

    let people = character_repository.get_all().await?;

    let character_dtos: Vec<CharacterDto> = people.into_iter().map(CharacterDto::from).collect();

    Ok((StatusCode::OK, axum::Json(character_dtos)).into_response())
}

/// Get a single character by id
#[utoipa::path(
    get,
    path = "/people/{people_id}",
    tag = PEOPLE_TAG,
    params(
        ("people_id" = i32, Path, description = "Id of the character to retrieve")
    ),
    responses(
        (status = 200, description = "Success when retrieving a character", body = CharacterDto),
        (status = 404, description = "Character not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_person(
    State(state): State<AppState>,
    Path(people_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let character_repository = CharacterRepository::new(&state.db);

    let person = match character_repository.get_by_id(people_id).await? {
        Some(person) => person,
        None => {
            return Ok((
                StatusCode::NOT_FOUND,
                axum::Json(ErrorDto {
                    error: "Person not found".to_string(),
                }),
            )
                .into_response())
        }
    };

    Ok((StatusCode::OK, axum::Json(CharacterDto::from(person))).into_response())
}
