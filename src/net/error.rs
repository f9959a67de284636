//! Error type for REST calls.

/// Failure modes of a backend request.
///
/// `Server` carries a message supplied by the backend's error body;
/// `Transport` covers everything else (network failure, non-JSON response,
/// running outside the browser). The `Display` output is what the session
/// store surfaces to the user, so the server message is preferred when one
/// exists.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    Server(String),
    #[error("request failed: {0}")]
    Transport(String),
}

impl ApiError {
    /// Stub error for native (non-`hydrate`) builds.
    pub fn unavailable() -> Self {
        Self::Transport("not available outside the browser".to_owned())
    }
}
