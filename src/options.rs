//! Configuration options for job extraction.
//!
//! The engine reads no configuration of its own; callers describe the page
//! (its URL) and may pin the scrape timestamp or substitute the rule tables.

use chrono::{DateTime, Utc};

use crate::rules::{Rules, DEFAULT_RULES};

/// Configuration options for one extraction pass.
///
/// # Example
///
/// ```rust
/// use rs_jobscrape::Options;
///
/// let options = Options {
///     url: Some("https://jobs.example.com/postings/42".to_string()),
///     ..Options::default()
/// };
/// assert!(options.scraped_at.is_none());
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Page URL; fills `url` and `domain` in the result.
    ///
    /// Default: `None`
    pub url: Option<String>,

    /// Timestamp recorded as `scrapedAt`.
    ///
    /// When `None`, the current time is taken at invocation.
    ///
    /// Default: `None`
    pub scraped_at: Option<DateTime<Utc>>,

    /// Selector lists, phrase lists and length bounds.
    ///
    /// Default: `&DEFAULT_RULES`
    pub rules: &'static Rules,
}

impl Options {
    /// Options for a page at `url`.
    #[must_use]
    pub fn for_url(url: &str) -> Self {
        Self {
            url: Some(url.to_string()),
            ..Self::default()
        }
    }
}

impl Default for Options {
    fn default() -> Self {
        Self {
            url: None,
            scraped_at: None,
            rules: &DEFAULT_RULES,
        }
    }
}
