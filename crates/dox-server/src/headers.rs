//! Preview response headers.
//!
//! Adds headers to all responses:
//! - Access-Control-Allow-Origin / -Methods (permissive CORS for local use)
//! - Cache-Control (never cache a preview)

use axum::http::HeaderValue;
use axum::http::header;
use tower_http::set_header::SetResponseHeaderLayer;

/// Cache-Control header value for preview responses.
const NO_CACHE: &str = "no-store, no-cache, must-revalidate";

/// Create layer that allows any origin.
pub(crate) fn cors_origin_layer() -> SetResponseHeaderLayer<HeaderValue> {
    SetResponseHeaderLayer::overriding(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    )
}

/// Create layer that advertises GET as the only method.
pub(crate) fn cors_methods_layer() -> SetResponseHeaderLayer<HeaderValue> {
    SetResponseHeaderLayer::overriding(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("GET"),
    )
}

/// Create layer that disables client caching.
pub(crate) fn no_cache_layer() -> SetResponseHeaderLayer<HeaderValue> {
    SetResponseHeaderLayer::overriding(header::CACHE_CONTROL, HeaderValue::from_static(NO_CACHE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_cache_value() {
        assert!(NO_CACHE.contains("no-store"));
        assert!(NO_CACHE.contains("must-revalidate"));
    }
}
