//! Tests for the get_people endpoint.

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use holocron::server::controller::character::get_people;

use super::*;

/// Tests listing of all stored characters.
///
/// Expected: Ok with 200 OK response containing every character
#[tokio::test]
async fn returns_all_characters() -> Result<(), TestError> {
    let test = TestBuilder::new().with_favorites_tables().build().await?;

    let luke = test
        .catalog()
        .insert_character("Luke", "Skywalker", Some("male"))
        .await?;
    let leia = test
        .catalog()
        .insert_character("Leia", "Organa", Some("female"))
        .await?;

    let result = get_people(State(test.state())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let json = response_json(resp).await;
    assert_eq!(
        json,
        serde_json::json!([
            {"id": luke.id, "name": "Luke", "surname": "Skywalker", "gender": "male"},
            {"id": leia.id, "name": "Leia", "surname": "Organa", "gender": "female"}
        ])
    );

    Ok(())
}

/// Tests the empty listing when no characters are stored.
///
/// Expected: Ok with 200 OK response and `[]` body
#[tokio::test]
async fn returns_empty_when_no_characters() -> Result<(), TestError> {
    let test = TestBuilder::new().with_favorites_tables().build().await?;

    let result = get_people(State(test.state())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let json = response_json(resp).await;
    assert_eq!(json, serde_json::json!([]));

    Ok(())
}

/// Tests error handling when database tables are missing.
///
/// Expected: Err with 500 INTERNAL_SERVER_ERROR response
#[tokio::test]
async fn error_when_tables_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = get_people(State(test.state())).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}
