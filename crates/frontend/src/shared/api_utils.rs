//! API utilities for frontend-backend communication

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location,
/// using port 3000 for the backend server.
pub fn api_base() -> String {
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

/// Build a full API URL from a path (should start with "/api/")
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Bearer header value from the stored session, if any
pub fn auth_header() -> Option<String> {
    crate::system::auth::storage::get_access_token().map(|t| format!("Bearer {}", t))
}

/// A 401 means the stored token is no longer valid: drop it and reload,
/// which lands the user on the login screen
pub fn handle_unauthorized(status: u16) {
    if status == 401 {
        crate::system::auth::storage::clear_tokens();
        if let Some(window) = web_sys::window() {
            let _ = window.location().reload();
        }
    }
}
