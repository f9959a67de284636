//! API endpoint configuration.

/// Base path for all REST calls. The backend is served same-origin behind
/// a reverse proxy, so a relative base is enough.
pub const API_BASE_URL: &str = "/api";
