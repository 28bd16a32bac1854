//! World routes, mounted at `/api/world`
//!
//! # Endpoints
//! - `GET /` - every world
//! - `GET /:worldId` - a single world
//! - `GET /:worldId/market/legacy` - the world's free-market listings

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

const INVALID_WORLD: &str = "Invalid world";
const WORLD_NOT_FOUND: &str = "Couldn't find that world.";

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_handler))
        .route("/:world_id", get(world_handler))
        .route("/:world_id/market/legacy", get(legacy_market_handler))
}

pub fn register_calls(registry: &mut ApiRegistry) {
    let world_id = || vec![ApiParameter::new(":worldId", "number", "The ID of the world")];

    registry.register_call(
        "/api/world",
        "Gets every world we know of",
        vec![],
        ExampleResponse::Json(json!([{ "id": 0, "name": "Scania", "marketSize": 1 }])),
    );
    registry.register_call(
        "/api/world/:worldId",
        "Gets a single world",
        world_id(),
        ExampleResponse::Json(json!({ "id": 0, "name": "Scania", "marketSize": 1 })),
    );
    registry.register_call(
        "/api/world/:worldId/market/legacy",
        "Gets the free market listings of a world",
        world_id(),
        ExampleResponse::Json(json!([{
            "id": 1,
            "itemId": 2000000,
            "quantity": 100,
            "price": 50,
            "shopName": "Potions"
        }])),
    );
}

fn parse_world_id(raw: &str) -> Result<u32> {
    raw.trim()
        .parse()
        .map_err(|_| ApiError::InvalidInput(INVALID_WORLD))
}

fn world_id_param(path: std::result::Result<Path<String>, PathRejection>) -> Result<u32> {
    let Path(raw) = path.map_err(|_| ApiError::InvalidInput(INVALID_WORLD))?;
    parse_world_id(&raw)
}

async fn list_handler(State(state): State<AppState>) -> Result<Response> {
    let worlds = state
        .worlds
        .list_worlds()
        .await
        .map_err(|err| ApiError::from_store(err, INVALID_WORLD, WORLD_NOT_FOUND))?;
    Ok(success(worlds.as_slice()))
}

async fn world_handler(
    State(state): State<AppState>,
    world_id: std::result::Result<Path<String>, PathRejection>,
) -> Result<Response> {
    let id = world_id_param(world_id)?;
    let world = state
        .worlds
        .get_world(id)
        .await
        .map_err(|err| ApiError::from_store(err, INVALID_WORLD, WORLD_NOT_FOUND))?;
    Ok(success(&world))
}

async fn legacy_market_handler(
    State(state): State<AppState>,
    world_id: std::result::Result<Path<String>, PathRejection>,
) -> Result<Response> {
    let id = world_id_param(world_id)?;
    let listings = state
        .worlds
        .get_legacy_market(id)
        .await
        .map_err(|err| ApiError::from_store(err, INVALID_WORLD, WORLD_NOT_FOUND))?;
    Ok(success(listings.as_slice()))
}
