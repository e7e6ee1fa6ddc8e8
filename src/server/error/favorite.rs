use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Favorite removal errors, surfaced as 404 responses.
///
/// The `Display` text of each variant is the normative `error` payload for
/// its endpoint.
#[derive(Error, Debug)]
pub enum FavoriteError {
    #[error("Favorite planet not found")]
    PlanetNotFound,
    #[error("Favorite person not found")]
    PersonNotFound,
}

impl IntoResponse for FavoriteError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        (
            StatusCode::NOT_FOUND,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
