use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        favorite::{FavoriteDto, FavoriteRequestDto},
    },
    server::{
        data::favorite::FavoriteRepository,
        error::{favorite::FavoriteError, Error},
        model::{app::AppState, favorite::FavoriteTarget},
        service::favorite::FavoriteService,
    },
};

pub static FAVORITE_TAG: &str = "favorite";

/// Get all favorites for a user with each target entity fully resolved
///
/// A user without favorites yields an empty list, never a 404.
#[utoipa::path(
    get,
    path = "/users/favorites/{user_id}",
    tag = FAVORITE_TAG,
    params(
        ("user_id" = i32, Path, description = "Id of the user whose favorites to list")
    ),
    responses(
        (status = 200, description = "Success when retrieving user favorites", body = Vec<FavoriteDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_favorites(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let favorite_service = FavoriteService::new(&state.db);

    let favorites = favorite_service.get_user_favorites(user_id).await?;

    Ok((StatusCode::OK, axum::Json(favorites)).into_response())
}

/// Add a planet to a user's favorites
///
/// Neither the user nor the planet id is checked for existence, and adding
/// the same favorite twice stores two rows.
#[utoipa::path(
    post,
    path = "/favorite/planet/{planet_id}",
    tag = FAVORITE_TAG,
    params(
        ("planet_id" = i32, Path, description = "Id of the planet to favorite")
    ),
    request_body = FavoriteRequestDto,
    responses(
        (status = 201, description = "Favorite planet added", body = MessageDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_favorite_planet(
    State(state): State<AppState>,
    Path(planet_id): Path<i32>,
    axum::Json(body): axum::Json<FavoriteRequestDto>,
) -> Result<impl IntoResponse, Error> {
    let favorite_repository = FavoriteRepository::new(&state.db);

    favorite_repository
        .create(body.user_id, FavoriteTarget::Planet(planet_id))
        .await?;

    Ok((
        StatusCode::CREATED,
        axum::Json(MessageDto {
            message: "Favorite planet added successfully".to_string(),
        }),
    )
        .into_response())
}

/// Add a character to a user's favorites
#[utoipa::path(
    post,
    path = "/favorite/people/{people_id}",
    tag = FAVORITE_TAG,
    params(
        ("people_id" = i32, Path, description = "Id of the character to favorite")
    ),
    request_body = FavoriteRequestDto,
    responses(
        (status = 201, description = "Favorite person added", body = MessageDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_favorite_person(
    State(state): State<AppState>,
    Path(people_id): Path<i32>,
    axum::Json(body): axum::Json<FavoriteRequestDto>,
) -> Result<impl IntoResponse, Error> {
    let favorite_repository = FavoriteRepository::new(&state.db);

    favorite_repository
        .create(body.user_id, FavoriteTarget::Character(people_id))
        .await?;

    Ok((
        StatusCode::CREATED,
        axum::Json(MessageDto {
            message: "Favorite person added successfully".to_string(),
        }),
    )
        .into_response())
}

/// Remove a planet from a user's favorites
///
/// Removes at most one matching row even when duplicates exist.
#[utoipa::path(
    delete,
    path = "/favorite/planet/{planet_id}",
    tag = FAVORITE_TAG,
    params(
        ("planet_id" = i32, Path, description = "Id of the favorited planet to remove")
    ),
    request_body = FavoriteRequestDto,
    responses(
        (status = 200, description = "Favorite planet deleted", body = MessageDto),
        (status = 404, description = "Favorite planet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_favorite_planet(
    State(state): State<AppState>,
    Path(planet_id): Path<i32>,
    axum::Json(body): axum::Json<FavoriteRequestDto>,
) -> Result<impl IntoResponse, Error> {
    let favorite_repository = FavoriteRepository::new(&state.db);

    let deleted = favorite_repository
        .delete_by_user_and_target(body.user_id, FavoriteTarget::Planet(planet_id))
        .await?;

    if deleted.is_none() {
        return Err(FavoriteError::PlanetNotFound.into());
    }

    Ok((
        StatusCode::OK,
        axum::Json(MessageDto {
            message: "Favorite planet deleted successfully".to_string(),
        }),
    )
        .into_response())
}

/// Remove a character from a user's favorites
///
/// Removes at most one matching row even when duplicates exist.
#[utoipa::path(
    delete,
    path = "/favorite/people/{people_id}",
    tag = FAVORITE_TAG,
    params(
        ("people_id" = i32, Path, description = "Id of the favorited character to remove")
    ),
    request_body = FavoriteRequestDto,
    responses(
        (status = 200, description = "Favorite person deleted", body = MessageDto),
        (status = 404, description = "Favorite person not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_favorite_person(
    State(state): State<AppState>,
    Path(people_id): Path<i32>,
    axum::Json(body): axum::Json<FavoriteRequestDto>,
) -> Result<impl IntoResponse, Error> {
    let favorite_repository = FavoriteRepository::new(&state.db);

    let deleted = favorite_repository
        .delete_by_user_and_target(body.user_id, FavoriteTarget::Character(people_id))
        .await?;

    if deleted.is_none() {
        return Err(FavoriteError::PersonNotFound.into());
    }

    Ok((
        StatusCode::OK,
        axum::Json(MessageDto {
            message: "Favorite person deleted successfully".to_string(),
        }),
    )
        .into_response())
}
