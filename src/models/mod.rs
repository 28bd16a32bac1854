//! Document and response models
//!
//! Documents (`Item`, `World`, `Character`) are read from the store as-is.
//! Each implements [`ToTransport`], which produces the JSON shape a client
//! receives.

pub mod character;
pub mod item;
pub mod responses;
pub mod transport;
pub mod world;

// Re-export commonly used types
pub use character::Character;
pub use item::{IconKind, Item, ItemDescription, ItemIcon, ItemResource, ItemSummary, HAIR_ID_RANGE};
pub use responses::{ErrorResponse, HealthResponse};
pub use transport::ToTransport;
pub use world::{MarketListing, World, WorldResource};
