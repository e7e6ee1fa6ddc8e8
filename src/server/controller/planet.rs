use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::{
    model::{api::ErrorDto, planet::PlanetDto},
    server::{data::planet::PlanetRepository, error::Error, model::app::AppState},
};

pub static PLANET_TAG: &str = "planets";

/// Get all planets in the reference dataset
#[utoipa::path(
    get,
    path = "/planets",
    tag = PLANET_TAG,
    responses(
        (status = 200, description = "Success when retrieving planets", body = Vec<PlanetDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_planets(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let planet_repository = PlanetRepository::new(&state.db);

    let planets = planet_repository.get_all().await?;

    let planet_dtos: Vec<PlanetDto> = planets.into_iter().map(PlanetDto::from).collect();

    Ok((StatusCode::OK, axum::Json(planet_dtos)).into_response())
}

/// Get a single planet by id
#[utoipa::path(
    get,
    path = "/planets/{planet_id}",
    tag = PLANET_TAG,
    params(
        ("planet_id" = i32, Path, description = "Id of the planet to retrieve")
    ),
    responses(
        (status = 200, description = "Success when retrieving a planet", body = PlanetDto),
        (status = 404, description = "Planet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_planet(
    State(state): State<AppState>,
    Path(planet_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let planet_repository = PlanetRepository::new(&state.db);

    let planet = match planet_repository.get_by_id(planet_id).await? {
        Some(planet) => planet,
        None => {
            return Ok((
                StatusCode::NOT_FOUND,
                axum::Json(ErrorDto {
                    error: "Planet not found".to_string(),
                }),
            )
                .into_response())
        }
    };

    Ok((StatusCode::OK, axum::Json(PlanetDto::from(planet))).into_response())
}
