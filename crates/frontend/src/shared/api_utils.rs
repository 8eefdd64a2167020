//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs.

use super::config::config;

/// Get the base URL for API requests
///
/// Taken from `[api] base_url`. An empty value keeps requests on the page's
/// own origin, so paths like `/api/order` are sent as-is.
pub fn api_base() -> String {
    config().api.base_url.trim_end_matches('/').to_string()
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/api/order");
/// ```
pub fn api_url(path: &str) -> String {
    join_url(&api_base(), path)
}

/// URL of a single order, with the id percent-encoded
pub fn order_url(id: &str) -> String {
    api_url(&format!("/api/order/{}", urlencoding::encode(id)))
}

fn join_url(base: &str, path: &str) -> String {
    if path.starts_with('/') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_origin_by_default() {
        assert_eq!(api_url("/api/user/logout"), "/api/user/logout");
    }

    #[test]
    fn test_order_url_encodes_id() {
        assert_eq!(order_url("abc 1/2"), "/api/order/abc%201%2F2");
    }

    #[test]
    fn test_join_url() {
        assert_eq!(join_url("https://api.example", "/api/order"), "https://api.example/api/order");
        assert_eq!(join_url("https://api.example", "api/order"), "https://api.example/api/order");
    }
}
