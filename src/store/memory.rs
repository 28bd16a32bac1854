//! In-memory document store

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use anyhow::Context;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::{CharacterRepository, ItemRepository, WorldRepository};
use crate::error::{StoreError, StoreResult};
use crate::models::{Character, Item, ItemSummary, MarketListing, World};

/// Layout of the seed file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreDocument {
    #[serde(default)]
    pub items: Vec<Item>,
    #[serde(default)]
    pub worlds: Vec<World>,
    #[serde(default)]
    pub characters: Vec<Character>,
}

// == Memory Store ==
/// Read-only store holding every document in memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: BTreeMap<u32, Item>,
    worlds: BTreeMap<u32, World>,
    /// Keyed by lowercased name
    characters: HashMap<String, Character>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Indexes the documents. Later duplicates replace earlier ones.
    pub fn from_document(document: StoreDocument) -> Self {
        Self {
            items: document.items.into_iter().map(|item| (item.id, item)).collect(),
            worlds: document
                .worlds
                .into_iter()
                .map(|world| (world.id, world))
                .collect(),
            characters: document
                .characters
                .into_iter()
                .map(|character| (character.name.to_lowercase(), character))
                .collect(),
        }
    }

    /// Loads and indexes a JSON seed file.
    pub async fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let raw = tokio::fs::read(path)
            .await
            .with_context(|| format!("reading store file {}", path.display()))?;
        let document: StoreDocument = serde_json::from_slice(&raw)
            .with_context(|| format!("parsing store file {}", path.display()))?;

        let store = Self::from_document(document);
        info!(
            "Loaded {} items, {} worlds, {} characters from {}",
            store.item_count(),
            store.worlds.len(),
            store.characters.len(),
            path.display()
        );
        Ok(store)
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }
}

#[async_trait]
impl ItemRepository for MemoryStore {
    async fn get_first(&self, id: u32) -> StoreResult<Item> {
        self.items.get(&id).cloned().ok_or(StoreError::NotFound)
    }

    async fn get_list(&self, include_hair: bool) -> StoreResult<Vec<ItemSummary>> {
        Ok(self
            .items
            .values()
            .filter(|item| include_hair || !item.is_hair())
            .map(Item::summary)
            .collect())
    }
}

#[async_trait]
impl WorldRepository for MemoryStore {
    async fn list_worlds(&self) -> StoreResult<Vec<World>> {
        Ok(self.worlds.values().cloned().collect())
    }

    async fn get_world(&self, id: u32) -> StoreResult<World> {
        self.worlds.get(&id).cloned().ok_or(StoreError::NotFound)
    }

    async fn get_legacy_market(&self, world_id: u32) -> StoreResult<Vec<MarketListing>> {
        self.worlds
            .get(&world_id)
            .map(|world| world.market.clone())
            .ok_or(StoreError::NotFound)
    }
}

#[async_trait]
impl CharacterRepository for MemoryStore {
    async fn get_character(&self, name: &str) -> StoreResult<Character> {
        let name = name.trim();
        if name.is_empty() {
            return Err(StoreError::InvalidInput("empty character name".to_string()));
        }
        self.characters
            .get(&name.to_lowercase())
            .cloned()
            .ok_or(StoreError::NotFound)
    }
}
