//! Tests for the get_planet endpoint.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use holocron::server::controller::planet::get_planet;

use super::*;

/// Tests retrieval of a single planet by id.
///
/// Expected: Ok with 200 OK response and the serialized planet
#[tokio::test]
async fn returns_planet() -> Result<(), TestError> {
    let test = TestBuilder::new().with_favorites_tables().build().await?;

    let planet = test
        .catalog()
        .insert_planet("Coruscant", Some("temperate"), Some(1_000_000_000_000))
        .await?;

    let result = get_planet(State(test.state()), Path(planet.id)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let json = response_json(resp).await;
    assert_eq!(
        json,
        serde_json::json!({
            "id": planet.id,
            "name": "Coruscant",
            "climate": "temperate",
            "population": 1_000_000_000_000_i64
        })
    );

    Ok(())
}

/// Tests the 404 response for an id with no stored planet.
///
/// Expected: Ok with 404 NOT_FOUND response and error payload
#[tokio::test]
async fn returns_404_for_unknown_planet() -> Result<(), TestError> {
    let test = TestBuilder::new().with_favorites_tables().build().await?;

    let nonexistent_planet_id = 1;
    let result = get_planet(State(test.state()), Path(nonexistent_planet_id)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let json = response_json(resp).await;
    assert_eq!(json, serde_json::json!({"error": "Planet not found"}));

    Ok(())
}

/// Tests error handling when database tables are missing.
///
/// Expected: Err with 500 INTERNAL_SERVER_ERROR response
#[tokio::test]
async fn error_when_tables_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = get_planet(State(test.state()), Path(1)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}
