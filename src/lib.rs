//! Maple API - read-only HTTP lookups for items, icons, worlds and characters
//!
//! Documents come from a store behind repository traits; item responses can
//! optionally be cached in process with a TTL.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod store;
pub mod tasks;

pub use api::{create_router, AppState};
pub use config::Config;
pub use store::MemoryStore;
pub use tasks::spawn_cleanup_task;
