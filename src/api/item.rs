//! Item routes, mounted at `/api/item`
//!
//! # Endpoints
//! - `GET /:itemId/icon` - inventory icon as PNG
//! - `GET /:itemId/iconRaw` - raw icon as PNG
//! - `GET /list/:includeHair?` - summaries of every item
//! - `GET /:itemId` - a single item

use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::header,
    middleware,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use serde_json::json;
use tracing::debug;

use super::registry::{ApiParameter, ApiRegistry, ExampleResponse};
use super::response::success;
use super::AppState;
use crate::cache::{cache_responses, ResponseCache};
use crate::error::{ApiError, Result};
use crate::models::IconKind;

const INVALID_ITEM: &str = "Invalid item";
const ITEM_NOT_FOUND: &str = "Couldn't find that item.";
const ICON_NOT_FOUND: &str = "Couldn't find an icon for that item.";

/// Builds the item sub-router, wrapped in the response cache when one is given.
pub fn router(cache: Option<ResponseCache>) -> Router<AppState> {
    let router = Router::new()
        .route("/list", get(list_handler))
        // `list` is not an item ID, so its icons are rejected rather than listed
        .route("/list/icon", get(invalid_item_handler))
        .route("/list/iconRaw", get(invalid_item_handler))
        .route("/list/:include_hair", get(list_with_flag_handler))
        .route("/:item_id/icon", get(icon_handler))
        .route("/:item_id/iconRaw", get(icon_raw_handler))
        .route("/:item_id", get(item_handler));

    match cache {
        Some(cache) => router.layer(middleware::from_fn_with_state(cache, cache_responses)),
        None => router,
    }
}

pub fn register_calls(registry: &mut ApiRegistry) {
    let item_id = || vec![ApiParameter::new(":itemId", "number", "The ID of the item")];

    registry.register_call(
        "/api/item/:itemId/icon",
        "Gets the inventory icon of an item",
        item_id(),
        ExampleResponse::Content("Image/PNG".to_string()),
    );
    registry.register_call(
        "/api/item/:itemId/iconRaw",
        "Gets the raw icon of an item",
        item_id(),
        ExampleResponse::Content("Image/PNG".to_string()),
    );
    registry.register_call(
        "/api/item/list",
        "Gets a listing of all items we know of",
        vec![],
        ExampleResponse::Json(json!([{ "id": 12345, "name": "Awesome Weapon" }])),
    );
    registry.register_call(
        "/api/item/:itemId",
        "Gets a single item",
        item_id(),
        ExampleResponse::Json(json!({
            "Description": "...",
            "MetaInfo": "...",
            "TypeInfo": "...",
            "id": 1382223
        })),
    );
}

/// Parses an item ID path segment: a non-negative integer, whitespace allowed.
pub fn parse_item_id(raw: &str) -> Option<u32> {
    raw.trim().parse().ok()
}

/// Validates the `:item_id` segment, including segments that are not UTF-8.
fn item_id_param(path: std::result::Result<Path<String>, PathRejection>) -> Result<u32> {
    path.ok()
        .and_then(|Path(raw)| parse_item_id(&raw))
        .ok_or(ApiError::InvalidInput(INVALID_ITEM))
}

/// Interprets the optional list flag. Only explicit "off" words are false.
pub fn parse_include_hair(raw: Option<&str>) -> bool {
    match raw.map(str::trim) {
        None | Some("") => false,
        Some(flag) => !matches!(
            flag.to_ascii_lowercase().as_str(),
            "false" | "0" | "no" | "off"
        ),
    }
}

async fn invalid_item_handler() -> Result<Response> {
    Err(ApiError::InvalidInput(INVALID_ITEM))
}

async fn icon_handler(
    State(state): State<AppState>,
    item_id: std::result::Result<Path<String>, PathRejection>,
) -> Result<Response> {
    serve_icon(&state, item_id_param(item_id)?, IconKind::Inventory).await
}

async fn icon_raw_handler(
    State(state): State<AppState>,
    item_id: std::result::Result<Path<String>, PathRejection>,
) -> Result<Response> {
    serve_icon(&state, item_id_param(item_id)?, IconKind::Raw).await
}

async fn serve_icon(state: &AppState, id: u32, kind: IconKind) -> Result<Response> {
    let item = state
        .items
        .get_first(id)
        .await
        .map_err(|err| ApiError::from_store(err, INVALID_ITEM, ICON_NOT_FOUND))?;

    let png = item
        .decode_icon(kind)?
        .ok_or(ApiError::NotFound(ICON_NOT_FOUND))?;
    debug!(item_id = id, ?kind, bytes = png.len(), "serving icon");

    Ok(([(header::CONTENT_TYPE, "image/png")], png).into_response())
}

async fn list_handler(State(state): State<AppState>) -> Result<Response> {
    list_items(&state, false).await
}

async fn list_with_flag_handler(
    State(state): State<AppState>,
    include_hair: std::result::Result<Path<String>, PathRejection>,
) -> Result<Response> {
    // A segment that is present but undecodable is still a non-empty flag
    let include_hair = include_hair
        .map(|Path(flag)| parse_include_hair(Some(&flag)))
        .unwrap_or(true);
    list_items(&state, include_hair).await
}

async fn list_items(state: &AppState, include_hair: bool) -> Result<Response> {
    let items = state
        .items
        .get_list(include_hair)
        .await
        .map_err(|err| ApiError::from_store(err, INVALID_ITEM, ITEM_NOT_FOUND))?;
    debug!(count = items.len(), include_hair, "listing items");
    Ok(success(items.as_slice()))
}

async fn item_handler(
    State(state): State<AppState>,
    item_id: std::result::Result<Path<String>, PathRejection>,
) -> Result<Response> {
    let id = item_id_param(item_id)?;
    let item = state
        .items
        .get_first(id)
        .await
        .map_err(|err| ApiError::from_store(err, INVALID_ITEM, ITEM_NOT_FOUND))?;
    Ok(success(&item))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::{body::Body, extract::Request, http::StatusCode};
    use tower::ServiceExt;

    use crate::models::{Item, ItemIcon};
    use crate::store::{MemoryStore, StoreDocument};

    fn test_app() -> Router {
        let mut sword = Item::new(1302000);
        sword.icon = Some(ItemIcon {
            icon: Some("iVBORw0KGgo=".to_string()),
            icon_raw: None,
        });
        let store = MemoryStore::from_document(StoreDocument {
            items: vec![sword, Item::new(2000000)],
            ..StoreDocument::default()
        });
        router(None).with_state(AppState::new(Arc::new(store)))
    }

    async fn status_of(app: Router, uri: &str) -> StatusCode {
        app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
            .status()
    }

    #[test]
    fn test_parse_item_id() {
        assert_eq!(parse_item_id("1302000"), Some(1302000));
        assert_eq!(parse_item_id(" 42 "), Some(42));
        assert_eq!(parse_item_id("abc"), None);
        assert_eq!(parse_item_id("-1"), None);
        assert_eq!(parse_item_id("1.5"), None);
        assert_eq!(parse_item_id(""), None);
    }

    #[test]
    fn test_parse_include_hair() {
        assert!(!parse_include_hair(None));
        assert!(!parse_include_hair(Some("false")));
        assert!(!parse_include_hair(Some("0")));
        assert!(!parse_include_hair(Some("OFF")));
        assert!(parse_include_hair(Some("true")));
        assert!(parse_include_hair(Some("1")));
        assert!(parse_include_hair(Some("hair")));
    }

    #[tokio::test]
    async fn test_item_routes_status_codes() {
        let app = test_app();
        assert_eq!(status_of(app.clone(), "/1302000").await, StatusCode::OK);
        assert_eq!(status_of(app.clone(), "/1302000/icon").await, StatusCode::OK);
        assert_eq!(status_of(app.clone(), "/1302000/iconRaw").await, StatusCode::NOT_FOUND);
        assert_eq!(status_of(app.clone(), "/2000000/icon").await, StatusCode::NOT_FOUND);
        assert_eq!(status_of(app.clone(), "/99/icon").await, StatusCode::NOT_FOUND);
        assert_eq!(status_of(app.clone(), "/99").await, StatusCode::NOT_FOUND);
        assert_eq!(status_of(app.clone(), "/abc").await, StatusCode::BAD_REQUEST);
        assert_eq!(status_of(app.clone(), "/list").await, StatusCode::OK);
        assert_eq!(status_of(app, "/list/true").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_list_is_not_an_icon_id() {
        let app = test_app();
        assert_eq!(status_of(app.clone(), "/list/icon").await, StatusCode::BAD_REQUEST);
        assert_eq!(status_of(app.clone(), "/list/iconRaw").await, StatusCode::BAD_REQUEST);
        assert_eq!(status_of(app, "/list/hair").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_non_utf8_segments() {
        let app = test_app();
        assert_eq!(status_of(app.clone(), "/%FF").await, StatusCode::BAD_REQUEST);
        assert_eq!(status_of(app.clone(), "/%FF/icon").await, StatusCode::BAD_REQUEST);
        assert_eq!(status_of(app.clone(), "/%FF/iconRaw").await, StatusCode::BAD_REQUEST);
        assert_eq!(status_of(app, "/list/%FF").await, StatusCode::OK);
    }

    #[test]
    fn test_registers_four_calls() {
        let mut registry = ApiRegistry::new();
        register_calls(&mut registry);
        assert_eq!(registry.calls().len(), 4);
        assert!(registry.find("/api/item/list").is_some());
    }
}
