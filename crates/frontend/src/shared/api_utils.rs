//! API utilities for frontend-backend communication
//!
//! The backend listens on its own port next to the static frontend. A build
//! can pin another origin with `API_BASE_URL`.

use crate::shared::master_data::AppConfig;

/// Get the base URL for API requests
///
/// # Returns
/// - `API_BASE_URL` when set at build time
/// - Otherwise the current host on the configured API port,
///   like "http://localhost:5000"
/// - Empty string if window is not available
pub fn api_base() -> String {
    if let Some(base) = option_env!("API_BASE_URL") {
        return base.trim_end_matches('/').to_string();
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
    format!("{}//{}:{}", protocol, hostname, AppConfig::DEFAULT.api_port)
}
