//! Application state shared by every handler

use std::sync::Arc;

use super::registry::ApiRegistry;
use super::{character, item, world};
use crate::cache::ResponseCache;
use crate::store::{CharacterRepository, ItemRepository, WorldRepository};

/// Repositories, registry and the optional response cache.
#[derive(Clone)]
pub struct AppState {
    pub items: Arc<dyn ItemRepository>,
    pub worlds: Arc<dyn WorldRepository>,
    pub characters: Arc<dyn CharacterRepository>,
    pub registry: Arc<ApiRegistry>,
    /// Present only when response caching is enabled
    pub cache: Option<ResponseCache>,
}

impl AppState {
    /// Creates state backed by a single store serving all three lookups.
    pub fn new<S>(store: Arc<S>) -> Self
    where
        S: ItemRepository + WorldRepository + CharacterRepository + 'static,
    {
        Self {
            items: store.clone(),
            worlds: store.clone(),
            characters: store,
            registry: Arc::new(registered_calls()),
            cache: None,
        }
    }

    /// Enables response caching on the item routes.
    pub fn with_cache(mut self, cache: ResponseCache) -> Self {
        self.cache = Some(cache);
        self
    }
}

/// Registry describing every route group.
pub fn registered_calls() -> ApiRegistry {
    let mut registry = ApiRegistry::new();
    world::register_calls(&mut registry);
    item::register_calls(&mut registry);
    character::register_calls(&mut registry);
    registry
}
