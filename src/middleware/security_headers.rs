//! Security-related response headers.
//!
//! Tokens may travel in cookies and query strings, so responses are kept out of
//! frames, caches and referrers by default.

use axum::Router;
use axum::http::header::{HeaderName, HeaderValue};
use tower_http::set_header::SetResponseHeaderLayer;

const SECURITY_HEADERS: &[(&str, &str)] = &[
    ("x-frame-options", "DENY"),
    ("content-security-policy", "frame-ancestors 'none'"),
    ("x-content-type-options", "nosniff"),
    // A token passed as ?token=... must not leak through the Referer header.
    ("referrer-policy", "no-referrer"),
    ("cache-control", "no-store"),
];

/// Apply the security headers to all responses, unless a handler already set them.
pub fn apply(router: Router) -> Router {
    SECURITY_HEADERS
        .iter()
        .fold(router, |router, &(name, value)| {
            router.layer(SetResponseHeaderLayer::if_not_present(
                HeaderName::from_static(name),
                HeaderValue::from_static(value),
            ))
        })
}
