//! Tests for the add_favorite_person endpoint.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use holocron::{
    model::favorite::FavoriteRequestDto, server::controller::favorite::add_favorite_person,
};
use sea_orm::EntityTrait;

use super::*;

/// Tests successful creation of a character favorite.
///
/// Expected: Ok with 201 CREATED response, confirmation message, and a
/// stored row carrying the character id
#[tokio::test]
async fn created_with_confirmation_message() -> Result<(), TestError> {
    let test = TestBuilder::new().with_favorites_tables().build().await?;

    let user = test.user().insert_user("luke@example.com", "luke").await?;
    let character = test
        .catalog()
        .insert_character("Han", "Solo", Some("male"))
        .await?;

    let result = add_favorite_person(
        State(test.state()),
        Path(character.id),
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
        serde_json::json!({"message": "Favorite person added successfully"})
    );

    let favorites = entity::prelude::Favorite::find().all(&test.db).await?;
    assert_eq!(favorites.len(), 1);
    assert_eq!(favorites[0].character_id, Some(character.id));
    assert_eq!(favorites[0].planet_id, None);

    Ok(())
}

/// Tests that no existence checks are applied to the user or character.
///
/// Expected: Ok with 201 CREATED response despite both ids being dangling
#[tokio::test]
async fn allows_nonexistent_references() -> Result<(), TestError> {
    let test = TestBuilder::new().with_favorites_tables().build().await?;

    let nonexistent_user_id = 99;
    let nonexistent_character_id = 42;
    let result = add_favorite_person(
        State(test.state()),
        Path(nonexistent_character_id),
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

/// Tests error handling when database tables are missing.
///
/// Expected: Err with 500 INTERNAL_SERVER_ERROR response
#[tokio::test]
async fn error_when_tables_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = add_favorite_person(
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
