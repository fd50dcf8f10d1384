use thiserror::Error;

/// Generic fallback shown for any catalog failure. The detailed cause is
/// carried on the async channel for diagnostics but never surfaced raw.
pub const FETCH_ERROR_MESSAGE: &str = "Error Fetching Movies, Please Try Again Later.";

/// Shown inside the detail overlay when either of its two requests fails.
pub const DETAIL_ERROR_MESSAGE: &str = "Failed to fetch movie details";

/// Failures from the movie catalog API
#[derive(Debug, Error, Clone)]
pub enum CatalogError {
    /// The transport call never produced a response
    #[error("request to {0} failed: {1}")]
    Transport(String, String),

    /// The server answered with a non-success status
    #[error("catalog returned {0} for {1}")]
    Status(u16, String),

    /// HTTP success wrapping a logical failure in the body
    #[error("catalog rejected the request: {0}")]
    Sentinel(String),

    /// The body could not be decoded into the expected shape
    #[error("failed to parse catalog response: {0}")]
    Parse(String),
}

impl CatalogError {
    /// Every catalog failure collapses to the same user-facing message.
    pub fn user_message(&self) -> &'static str {
        FETCH_ERROR_MESSAGE
    }
}

/// Failures from the trending document store. Writes are fire-and-forget so
/// these never reach the user; they only travel the async channel.
#[derive(Debug, Error, Clone)]
pub enum TrendingError {
    #[error("request to {0} failed: {1}")]
    Transport(String, String),

    #[error("store returned {0} for {1}")]
    Status(u16, String),

    #[error("failed to parse store response: {0}")]
    Parse(String),
}
