//! Settings the HTTP boundary needs, loaded once at startup.

use std::fmt;

/// Immutable API configuration shared by every request.
#[derive(Clone)]
pub struct ApiConfig {
    /// Shared secret every request must present in `X-API-Key`.
    pub api_key: String,
}

impl ApiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self { api_key: api_key.into() }
    }
}

impl fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiConfig")
            .field("api_key", &"<redacted>")
            .finish()
    }
}
