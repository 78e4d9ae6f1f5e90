//! API utilities for talking to the sentiment-analysis service
//!
//! Provides the base URL used by all requests.

/// Get the base URL for analysis requests
///
/// Resolved at build time from the `SENTIMENT_API_URL` environment variable
/// when it is set (trailing slash stripped). Otherwise the URL is derived
/// from the current window location, using port 3000 for the service.
///
/// # Returns
/// - Base URL like "http://localhost:3000" or "https://example.com:3000"
/// - Empty string if window is not available
///
/// # Example
/// ```rust,no_run
/// use frontend::shared::api_utils::api_base;
///
/// let url = format!("{}/analyze-sentiment", api_base());
/// ```
pub fn api_base() -> String {
    if let Some(url) = option_env!("SENTIMENT_API_URL") {
        return url.trim_end_matches('/').to_string();
    }

    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}
