//! Request preprocessing
//!
//! Runs ahead of routing: rewrites the retired free-market URL onto the world
//! router and stamps CORS headers on every response.

use axum::{
    extract::Request,
    http::{header, HeaderValue, Uri},
    middleware::Next,
    response::Response,
};
use tracing::debug;

/// Headers browsers may send on cross-origin requests.
pub const ALLOWED_HEADERS: &str = "Origin, X-Requested-With, Content-Type, Accept";

const LEGACY_PREFIX: &str = "/api/fm/world/";
const LEGACY_SUFFIX: &str = "/rooms/legacy";

/// Maps `/api/fm/world/{id}/rooms/legacy` to `/api/world/{id}/market/legacy`.
///
/// `{id}` is zero or more digits; an empty one is left for the world router
/// to reject. Returns `None` for any other path.
pub fn rewrite_legacy_path(path: &str) -> Option<String> {
    let world_id = path
        .strip_prefix(LEGACY_PREFIX)?
        .strip_suffix(LEGACY_SUFFIX)?;
    if !world_id.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(format!("/api/world/{}/market/legacy", world_id))
}

/// Rewritten URI with the original query string kept.
fn rewrite_legacy_uri(uri: &Uri) -> Option<Uri> {
    let path = rewrite_legacy_path(uri.path())?;
    let path_and_query = match uri.query() {
        Some(query) => format!("{}?{}", path, query),
        None => path,
    };
    path_and_query.parse().ok()
}

/// Middleware applied to the whole API before any sub-router sees a request.
pub async fn preprocess(mut request: Request, next: Next) -> Response {
    if let Some(rewritten) = rewrite_legacy_uri(request.uri()) {
        debug!(from = %request.uri(), to = %rewritten, "rewriting legacy route");
        *request.uri_mut() = rewritten;
    }

    let mut response = next.run(request).await;
    let headers = response.headers_mut();
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(ALLOWED_HEADERS),
    );
    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_rewrite_legacy_path() {
        assert_eq!(
            rewrite_legacy_path("/api/fm/world/42/rooms/legacy").as_deref(),
            Some("/api/world/42/market/legacy")
        );
        assert_eq!(
            rewrite_legacy_path("/api/fm/world//rooms/legacy").as_deref(),
            Some("/api/world//market/legacy")
        );
        assert_eq!(rewrite_legacy_path("/api/fm/world/abc/rooms/legacy"), None);
        assert_eq!(rewrite_legacy_path("/api/world/42/market/legacy"), None);
        assert_eq!(rewrite_legacy_path("/api/item/42"), None);
    }

    #[test]
    fn test_rewrite_keeps_query() {
        let uri: Uri = "/api/fm/world/3/rooms/legacy?page=2".parse().unwrap();
        assert_eq!(
            rewrite_legacy_uri(&uri).unwrap(),
            "/api/world/3/market/legacy?page=2"
        );
    }

    proptest! {
        #[test]
        fn prop_every_numeric_world_is_rewritten(id in 0u64..10_000_000) {
            let path = format!("/api/fm/world/{}/rooms/legacy", id);
            let expected = format!("/api/world/{}/market/legacy", id);
            prop_assert_eq!(rewrite_legacy_path(&path), Some(expected));
        }

        #[test]
        fn prop_other_paths_untouched(path in "/api/(item|world|character)/[a-z0-9/]{0,20}") {
            prop_assert_eq!(rewrite_legacy_path(&path), None);
        }
    }
}
