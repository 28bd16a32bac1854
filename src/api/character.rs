//! Character routes, mounted at `/api/character`

use axum::{
    extract::{rejection::PathRejection, Path, State},
    response::Response,
    routing::get,
    Router,
};
use serde_json::json;

use super::registry::{ApiParameter, ApiRegistry, ExampleResponse};
use super::response::success;
use super::AppState;
use crate::error::{ApiError, Result};
use crate::models::character::MAX_NAME_LENGTH;

const INVALID_CHARACTER: &str = "Invalid character";
const CHARACTER_NOT_FOUND: &str = "Couldn't find that character.";

pub fn router() -> Router<AppState> {
    Router::new().route("/:character_name", get(character_handler))
}

pub fn register_calls(registry: &mut ApiRegistry) {
    registry.register_call(
        "/api/character/:characterName",
        "Gets a single character by name",
        vec![ApiParameter::new(
            ":characterName",
            "string",
            "The name of the character",
        )],
        ExampleResponse::Json(json!({
            "name": "Athena",
            "worldId": 0,
            "level": 200,
            "job": "Hero"
        })),
    );
}

async fn character_handler(
    State(state): State<AppState>,
    name: std::result::Result<Path<String>, PathRejection>,
) -> Result<Response> {
    let Path(name) = name.map_err(|_| ApiError::InvalidInput(INVALID_CHARACTER))?;
    let name = name.trim();
    if name.is_empty() || name.chars().count() > MAX_NAME_LENGTH {
        return Err(ApiError::InvalidInput(INVALID_CHARACTER));
    }

    let character = state
        .characters
        .get_character(name)
        .await
        .map_err(|err| ApiError::from_store(err, INVALID_CHARACTER, CHARACTER_NOT_FOUND))?;
    Ok(success(&character))
}
