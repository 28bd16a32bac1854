//! Cache Entry Module
//!
//! A stored response plus its expiry bookkeeping.

use std::time::{SystemTime, UNIX_EPOCH};

use axum::body::Bytes;

/// A buffered 200 response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachedResponse {
    /// `Content-Type` of the original response, if it had one
    pub content_type: Option<String>,
    pub body: Bytes,
}

impl CachedResponse {
    pub fn new(content_type: Option<String>, body: impl Into<Bytes>) -> Self {
        Self {
            content_type,
            body: body.into(),
        }
    }

    pub fn size(&self) -> usize {
        self.body.len()
    }
}

// == Cache Entry ==
#[derive(Debug, Clone)]
pub struct CacheEntry {
    pub value: CachedResponse,
    /// Creation timestamp (Unix milliseconds)
    pub created_at: u64,
    /// Expiration timestamp (Unix milliseconds)
    pub expires_at: u64,
}

impl CacheEntry {
    /// Creates an entry that expires `ttl_seconds` from now.
    pub fn new(value: CachedResponse, ttl_seconds: u64) -> Self {
        let now = current_timestamp_ms();
        Self {
            value,
            created_at: now,
            expires_at: now.saturating_add(ttl_seconds.saturating_mul(1000)),
        }
    }

    /// An entry is expired once the current time reaches `expires_at`.
    pub fn is_expired(&self) -> bool {
        current_timestamp_ms() >= self.expires_at
    }

    /// Remaining lifetime in whole seconds, zero once expired.
    pub fn ttl_remaining(&self) -> u64 {
        self.expires_at.saturating_sub(current_timestamp_ms()) / 1000
    }
}

/// Returns current Unix timestamp in milliseconds.
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as u64)
        .unwrap_or(0)
}
