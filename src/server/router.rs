//! HTTP routing and OpenAPI documentation configuration.
//!
//! All API endpoints are registered here with their OpenAPI specifications,
//! and Swagger UI is configured to provide interactive API documentation at
//! `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger
/// UI documentation.
///
/// Each endpoint is annotated with OpenAPI specifications via utoipa, which
/// are collected into a unified OpenAPI document served at
/// `/api/docs/openapi.json`; interactive documentation lives at `/api/docs`.
///
/// # Registered Endpoints
/// - `GET /people`, `GET /people/{people_id}` - Character reference data
/// - `GET /planets`, `GET /planets/{planet_id}` - Planet reference data
/// - `GET /users` - User accounts
/// - `GET /users/favorites/{user_id}` - A user's resolved favorites
/// - `POST | DELETE /favorite/planet/{planet_id}` - Favorite a planet
/// - `POST | DELETE /favorite/people/{people_id}` - Favorite a character
///
/// # Returns
/// An Axum `Router<AppState>` ready to be served once state is attached.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Holocron", description = "Holocron API"), tags(
        (name = controller::favorite::FAVORITE_TAG, description = "Favorites API routes"),
        (name = controller::character::PEOPLE_TAG, description = "Character reference data routes"),
        (name = controller::planet::PLANET_TAG, description = "Planet reference data routes"),
        (name = controller::user::USER_TAG, description = "User API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::character::get_people))
        .routes(routes!(controller::character::get_person))
        .routes(routes!(controller::planet::get_planets))
        .routes(routes!(controller::planet::get_planet))
        .routes(routes!(controller::user::get_users))
        .routes(routes!(controller::favorite::get_user_favorites))
        .routes(routes!(
            controller::favorite::add_favorite_planet,
            controller::favorite::delete_favorite_planet
        ))
        .routes(routes!(
            controller::favorite::add_favorite_person,
            controller::favorite::delete_favorite_person
        ))
        .split_for_parts();

    let routes = routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api));

    routes
}
