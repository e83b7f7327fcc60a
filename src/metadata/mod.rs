//! Metadata extraction module.
//!
//! Page-level signals that do not come from visible body content: embedded
//! JSON-LD job postings and the document `<title>`.

pub mod json_ld;
pub mod page_title;

pub use json_ld::{extract_job_posting, JobPostingMetadata};
pub use page_title::{company_from_page_title, page_title};
