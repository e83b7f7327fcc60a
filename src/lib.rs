//! # rs-jobscrape
//!
//! Heuristic job-posting field extraction.
//!
//! Job pages come from hundreds of unrelated templates (applicant-tracking
//! systems, job boards, corporate career sites) with no shared markup. This
//! library turns one such page into a flat record of title, company,
//! description and salary, working from content shape and semantic cues:
//! embedded structured data, prioritized selector hints, section headings
//! and salary patterns.
//!
//! ## Quick Start
//!
//! ```rust
//! use rs_jobscrape::extract_job;
//!
//! let html = r#"<html><head><title>Backend Engineer at Initech</title></head>
//! <body><h1>Backend Engineer</h1><p>Salary: $120k - $140k per year</p></body></html>"#;
//!
//! let job = extract_job(html, "https://careers.initech.example/jobs/17");
//! assert_eq!(job.title, "Backend Engineer");
//! assert_eq!(job.company, "Initech");
//! assert_eq!(job.salary, "$120k - $140k per year");
//! assert_eq!(job.domain, "careers.initech.example");
//! ```
//!
//! ## Features
//!
//! - **Structured data first**: JSON-LD `JobPosting` organization and title
//! - **Selector cascade**: ordered, site-specific hints with a shared acceptance filter
//! - **Heading-relative descriptions**: content following "About the role" and friends
//! - **Salary inference**: amounts qualified with a pay period found nearby
//! - **Never fails**: fields no strategy can fill are left empty
//!
//! Saving results is left to a [`store::RecordSink`]; pages from blocked
//! domains can be refused up front with [`url_utils::guard_domain`].

mod error;
mod extract;
mod options;
mod result;

/// DOM operations adapter over `dom_query`.
pub mod dom;

/// Candidate acceptance filter.
pub mod filter;

/// Text cleaning and capping.
pub mod normalize;

/// Compiled regex patterns.
pub mod patterns;

/// Selector lists, phrase lists and length bounds.
pub mod rules;

/// Selector cascade and structural rules.
pub mod selector;

/// Heading locator, salary extraction and fallbacks.
pub mod extractor;

/// Page metadata (JSON-LD, `<title>`).
pub mod metadata;

/// URL utilities: domain, block list, ATS slugs.
pub mod url_utils;

/// Character encoding detection and transcoding.
pub mod encoding;

/// Saved-job records.
pub mod record;

/// Record persistence.
pub mod store;

// Public API - re-exports
pub use dom_query::Document;
pub use error::{Error, Result};
pub use options::Options;
pub use record::SavedJob;
pub use result::{ExtractionResult, Field};
pub use rules::{Rules, DEFAULT_RULES};

/// Extracts job fields from an HTML page using default options.
///
/// # Arguments
///
/// * `html` - The HTML document as a string slice
/// * `url` - The page URL; fills `url` and `domain` (may be empty)
///
/// # Example
///
/// ```rust
/// use rs_jobscrape::extract_job;
///
/// let job = extract_job("<html><body></body></html>", "");
/// assert!(job.is_blank());
/// ```
#[must_use]
pub fn extract_job(html: &str, url: &str) -> ExtractionResult {
    let options = if url.trim().is_empty() {
        Options::default()
    } else {
        Options::for_url(url)
    };
    extract_job_with_options(html, &options)
}

/// Extracts job fields from an HTML page with custom options.
///
/// # Example
///
/// ```rust
/// use chrono::{TimeZone, Utc};
/// use rs_jobscrape::{extract_job_with_options, Options};
///
/// let options = Options {
///     scraped_at: Utc.with_ymd_and_hms(2026, 1, 5, 9, 30, 0).single(),
///     ..Options::default()
/// };
/// let job = extract_job_with_options("<h1>Data Analyst</h1>", &options);
/// assert_eq!(job.title, "Data Analyst");
/// assert_eq!(job.scraped_at.to_rfc3339(), "2026-01-05T09:30:00+00:00");
/// ```
#[must_use]
pub fn extract_job_with_options(html: &str, options: &Options) -> ExtractionResult {
    let document = dom::parse(html);
    extract::extract_document(&document, options)
}

/// Extracts job fields from HTML bytes with automatic encoding detection.
///
/// The encoding comes from a byte-order mark, `<meta charset="...">` or
/// `<meta http-equiv="Content-Type" content="...; charset=...">`, defaulting
/// to UTF-8. Invalid sequences are replaced with U+FFFD rather than causing
/// errors.
///
/// # Example
///
/// ```rust
/// use rs_jobscrape::extract_job_bytes;
///
/// let html = b"<html><head><meta charset=\"ISO-8859-1\"></head><body><h1>Caf\xE9 Manager</h1></body></html>";
/// let job = extract_job_bytes(html, "");
/// assert_eq!(job.title, "Café Manager");
/// ```
#[must_use]
pub fn extract_job_bytes(html: &[u8], url: &str) -> ExtractionResult {
    let html_str = encoding::decode_page(html);
    extract_job(&html_str, url)
}

/// Extracts job fields from an already parsed document.
///
/// The document is only read, never modified.
#[must_use]
pub fn extract_from_document(document: &Document, options: &Options) -> ExtractionResult {
    extract::extract_document(document, options)
}
