//! Field extractors that work from page content rather than CSS hints.
//!
//! # Module Structure
//!
//! - `heading`: Description located by its introducing section heading
//! - `salary`: Salary amounts and pay periods from full page text
//! - `fallback`: Last-resort title and company sources
//!
//! # Usage
//!
//! ```rust
//! use rs_jobscrape::{dom, extractor, DEFAULT_RULES};
//!
//! let doc = dom::parse("<h3>Site Reliability Engineer</h3><p>Pay: $60/hour</p>");
//!
//! let title = extractor::fallback::title_from_headings(&doc, &DEFAULT_RULES);
//! assert_eq!(title.as_deref(), Some("Site Reliability Engineer"));
//!
//! let page_text = dom::visible_text(&doc.select("body"));
//! let salary = extractor::extract_salary(&page_text, &DEFAULT_RULES);
//! assert_eq!(salary.as_deref(), Some("$60/hour"));
//! ```

pub mod fallback;
pub mod heading;
pub mod salary;

pub use heading::{locate, HeadingMatch};
pub use salary::extract_salary;
