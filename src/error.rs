//! Error types for rs-jobscrape.
//!
//! The extraction engine itself never fails: every strategy degrades to an
//! empty field. These errors belong to the surfaces around it (record store,
//! domain guard, command line).

/// Error type for storage and guard operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Reading or writing the record store failed.
    #[error("I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The record store contents could not be (de)serialized.
    #[error("JSON failed: {0}")]
    Json(#[from] serde_json::Error),

    /// The page URL could not be parsed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The page belongs to a host the caller refuses to scrape.
    #[error("Scraping is disabled for domain: {0}")]
    BlockedDomain(String),

    /// The record store is in an unusable state.
    #[error("Record store failed: {0}")]
    Store(String),
}

/// Result type alias for storage and guard operations.
pub type Result<T> = std::result::Result<T, Error>;
