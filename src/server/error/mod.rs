//! Error types for the Holocron server application.
//!
//! Domain errors use `thiserror` and implement `IntoResponse` for Axum HTTP
//! responses. Failures without a specific HTTP mapping fall through to a
//! generic 500 wrapper that logs the cause without leaking it to the client.

pub mod config;
pub mod favorite;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{config::ConfigError, favorite::FavoriteError},
};

/// Main error type for the Holocron server application.
///
/// Aggregates the domain-specific error types and external library errors
/// into a single unified error type, with `#[from]` conversions so `?` works
/// throughout the repository and controller layers.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Favorite lookup error (no association matching the request).
    #[error(transparent)]
    FavoriteError(#[from] FavoriteError),
    /// Internal error indicating a bug in Holocron's code.
    ///
    /// Raised for stored favorite rows that cannot be resolved to a target
    /// entity or whose kind disagrees with their populated columns.
    #[error("Internal error with Holocron's code, this indicates a bug: {0:?}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 404 Not Found - For missing favorite associations
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::FavoriteError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal
/// Server Error response.
///
/// Logs the full error message for debugging but returns a generic message
/// to the client so internal details are not exposed.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
