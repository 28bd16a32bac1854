//! Response caching middleware
//!
//! Wraps a sub-router: GET requests are answered from the cache when a live
//! entry exists, otherwise the handler runs and a 200 response is buffered
//! and stored under the request's path and query.

use std::sync::Arc;

use axum::{
    body::Body,
    extract::{Request, State},
    http::{header, HeaderValue, Method, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::cache::{CacheEntry, CacheStore, CachedResponse};
use crate::config::{CacheConfig, Environment};
use crate::error::{ApiError, CacheError};

/// Shared handle on the response cache.
#[derive(Debug, Clone)]
pub struct ResponseCache {
    store: Arc<RwLock<CacheStore>>,
    /// Log hits and misses at info instead of debug
    verbose: bool,
}

impl ResponseCache {
    pub fn new(store: CacheStore, verbose: bool) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
            verbose,
        }
    }

    pub fn from_config(config: &CacheConfig, environment: Environment) -> Self {
        Self::new(
            CacheStore::new(config.max_entries, config.ttl),
            environment.is_development(),
        )
    }

    /// The underlying store, for the cleanup task.
    pub fn store(&self) -> Arc<RwLock<CacheStore>> {
        Arc::clone(&self.store)
    }

    pub async fn lookup(&self, key: &str) -> Option<CacheEntry> {
        // Write lock: a lookup updates LRU order and counters
        self.store.write().await.get(key)
    }

    pub async fn insert(&self, key: String, value: CachedResponse) -> Result<(), CacheError> {
        self.store.write().await.set(key, value, None)
    }

    fn log(&self, event: &str, key: &str) {
        if self.verbose {
            info!(key, "response cache {}", event);
        } else {
            debug!(key, "response cache {}", event);
        }
    }
}

/// Middleware serving and filling the response cache.
pub async fn cache_responses(
    State(cache): State<ResponseCache>,
    request: Request,
    next: Next,
) -> Response {
    if request.method() != Method::GET {
        return next.run(request).await;
    }

    let key = request
        .uri()
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| request.uri().path().to_string());

    if let Some(entry) = cache.lookup(&key).await {
        cache.log("hit", &key);
        return replay(entry);
    }
    cache.log("miss", &key);

    let response = next.run(request).await;
    if response.status() != StatusCode::OK {
        return response;
    }

    let (parts, body) = response.into_parts();
    let bytes = match axum::body::to_bytes(body, usize::MAX).await {
        Ok(bytes) => bytes,
        Err(err) => {
            return ApiError::Internal(
                anyhow::Error::new(err).context("buffering response for the cache"),
            )
            .into_response()
        }
    };

    let content_type = parts
        .headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);
    if let Err(err) = cache
        .insert(key.clone(), CachedResponse::new(content_type, bytes.clone()))
        .await
    {
        debug!(key = %key, "response not cached: {}", err);
    }

    Response::from_parts(parts, Body::from(bytes))
}

/// Rebuilds a 200 response from a cache entry.
fn replay(entry: CacheEntry) -> Response {
    let max_age = entry.ttl_remaining();
    let CachedResponse { content_type, body } = entry.value;

    let mut response = Response::new(Body::from(body));
    let headers = response.headers_mut();
    if let Some(value) = content_type.and_then(|ct| HeaderValue::try_from(ct).ok()) {
        headers.insert(header::CONTENT_TYPE, value);
    }
    if let Ok(value) = HeaderValue::try_from(format!("max-age={}", max_age)) {
        headers.insert(header::CACHE_CONTROL, value);
    }
    response
}
