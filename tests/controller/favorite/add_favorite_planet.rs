//! Tests for the add_favorite_planet endpoint.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use holocron::{
    model::favorite::FavoriteRequestDto, server::controller::favorite::add_favorite_planet,
};
use sea_orm::EntityTrait;

use super::*;

/// Tests successful creation of a planet favorite.
///
/// Expected: Ok with 201 CREATED response, confirmation message, and a
/// stored row carrying the planet id
#[tokio::test]
async fn created_with_confirmation_message() -> Result<(), TestError> {
    let test = TestBuilder::new().with_favorites_tables().build().await?;

    let user = test.user().insert_user("luke@example.com", "luke").await?;
    let planet = test
        .catalog()
        .insert_planet("Tatooine", Some("arid"), Some(200_000))
        .await?;

    let result = add_favorite_planet(
        State(test.state()),
        Path(planet.id),
        axum::Json(FavoriteRequestDto {
            user_id: Some(user.id),
        }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let json = response_json(resp).await;
    assert_eq!(
        json,
        serde_json::json!({"message": "Favorite planet added successfully"})
    );

    let favorites = entity::prelude::Favorite::find().all(&test.db).await?;
    assert_eq!(favorites.len(), 1);
    assert_eq!(favorites[0].planet_id, Some(planet.id));
    assert_eq!(favorites[0].character_id, None);

    Ok(())
}

/// Tests that a body without a user_id field is accepted.
///
/// Expected: Ok with 201 CREATED response and a row with a null user
/// reference
#[tokio::test]
async fn allows_missing_user_id() -> Result<(), TestError> {
    let test = TestBuilder::new().with_favorites_tables().build().await?;

    let planet = test
        .catalog()
        .insert_planet("Hoth", Some("frozen"), None)
        .await?;

    let result = add_favorite_planet(
        State(test.state()),
        Path(planet.id),
        axum::Json(FavoriteRequestDto { user_id: None }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let favorites = entity::prelude::Favorite::find().all(&test.db).await?;
    assert_eq!(favorites.len(), 1);
    assert_eq!(favorites[0].user_id, None);

    Ok(())
}

/// Tests that no existence checks are applied to the user or planet.
///
/// Expected: Ok with 201 CREATED response despite both ids being dangling
#[tokio::test]
async fn allows_nonexistent_references() -> Result<(), TestError> {
    let test = TestBuilder::new().with_favorites_tables().build().await?;

    let nonexistent_user_id = 99;
    let nonexistent_planet_id = 42;
    let result = add_favorite_planet(
        State(test.state()),
        Path(nonexistent_planet_id),
        axum::Json(FavoriteRequestDto {
            user_id: Some(nonexistent_user_id),
        }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    Ok(())
}

/// Tests that repeating an identical request stores a second row.
///
/// Expected: Ok with 201 CREATED on both calls and two stored rows
#[tokio::test]
async fn duplicate_add_creates_second_row() -> Result<(), TestError> {
    let test = TestBuilder::new().with_favorites_tables().build().await?;

    let user = test.user().insert_user("leia@example.com", "leia").await?;
    let planet = test
        .catalog()
        .insert_planet("Naboo", Some("temperate"), Some(4_500_000_000))
        .await?;

    for _ in 0..2 {
        let result = add_favorite_planet(
            State(test.state()),
            Path(planet.id),
            axum::Json(FavoriteRequestDto {
                user_id: Some(user.id),
            }),
        )
        .await;

        assert!(result.is_ok());
        assert_eq!(
            result.unwrap().into_response().status(),
            StatusCode::CREATED
        );
    }

    let favorites = entity::prelude::Favorite::find().all(&test.db).await?;
    assert_eq!(favorites.len(), 2);

    Ok(())
}

/// Tests error handling when database tables are missing.
///
/// Expected: Err with 500 INTERNAL_SERVER_ERROR response
#[tokio::test]
async fn error_when_tables_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = add_favorite_planet(
        State(test.state()),
        Path(1),
        axum::Json(FavoriteRequestDto { user_id: Some(1) }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}
