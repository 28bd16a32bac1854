//! Response Cache Module
//!
//! In-process key-value cache with TTL expiration and LRU eviction, used to
//! keep rendered item responses around between requests.

mod entry;
mod lru;
mod middleware;
mod stats;
mod store;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use entry::{CacheEntry, CachedResponse};
pub use lru::LruTracker;
pub use middleware::{cache_responses, ResponseCache};
pub use stats::CacheStats;
pub use store::CacheStore;

// == Public Constants ==
/// Maximum allowed key (request path and query) length in bytes
pub const MAX_KEY_LENGTH: usize = 1024;

/// Maximum cached body size in bytes; larger responses pass through uncached
pub const MAX_VALUE_SIZE: usize = 16 * 1024 * 1024; // 16 MB
