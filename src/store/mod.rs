//! Document store access
//!
//! Route handlers only see the repository traits. [`MemoryStore`] is the
//! bundled backend: every document is loaded from a JSON seed file at startup
//! and served read-only afterwards.

mod memory;

use async_trait::async_trait;

use crate::error::StoreResult;
use crate::models::{Character, Item, ItemSummary, MarketListing, World};

pub use memory::{MemoryStore, StoreDocument};

/// Item lookups.
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Fetches the item with the given ID.
    async fn get_first(&self, id: u32) -> StoreResult<Item>;

    /// Lists every known item, ordered by ID. Hair items are skipped unless
    /// `include_hair` is set.
    async fn get_list(&self, include_hair: bool) -> StoreResult<Vec<ItemSummary>>;
}

/// World and market lookups.
#[async_trait]
pub trait WorldRepository: Send + Sync {
    async fn list_worlds(&self) -> StoreResult<Vec<World>>;

    async fn get_world(&self, id: u32) -> StoreResult<World>;

    /// Market listings of a world; `NotFound` if the world itself is unknown.
    async fn get_legacy_market(&self, world_id: u32) -> StoreResult<Vec<MarketListing>>;
}

/// Character lookups.
#[async_trait]
pub trait CharacterRepository: Send + Sync {
    /// Fetches a character by name, ignoring case.
    async fn get_character(&self, name: &str) -> StoreResult<Character>;
}
