//! API Module
//!
//! HTTP surface of the service.
//!
//! # Endpoints
//! - `/api/item/...` - item lookups and icons
//! - `/api/world/...` - worlds and their legacy market
//! - `/api/character/...` - character lookups
//! - `GET /api/calls` - the API registry
//! - `GET /health` - health check

pub mod character;
pub mod item;
pub mod preprocess;
pub mod registry;
pub mod response;
pub mod routes;
pub mod state;
pub mod world;

pub use registry::{ApiCall, ApiParameter, ApiRegistry, ExampleResponse};
pub use response::success;
pub use routes::create_router;
pub use state::AppState;
