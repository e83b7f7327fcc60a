//! JSON-LD JobPosting Parsing
//!
//! Reads `<script type="application/ld+json">` blocks and pulls the hiring
//! organization and title out of `JobPosting` entries. A block may hold one
//! object or an array of them; an object may nest its entries under
//! `@graph`. Blocks that fail to parse are skipped.

use dom_query::{Document, Selection};
use serde_json::{Map, Value};
use tracing::debug;

use crate::dom;
use crate::normalize;

/// Organization sub-fields, in priority order.
const ORGANIZATION_KEYS: &[&str] = &["hiringOrganization", "organization", "publisher"];

/// Normalized view of the embedded job-posting data.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobPostingMetadata {
    /// Hiring organization name.
    pub organization: Option<String>,

    /// Posting title.
    pub title: Option<String>,
}

/// Extract job-posting metadata from all JSON-LD blocks in document order.
///
/// Each field takes the first usable value found; later blocks only fill
/// what earlier ones left empty.
#[must_use]
pub fn extract_job_posting(doc: &Document) -> JobPostingMetadata {
    let mut metadata = JobPostingMetadata::default();

    for script in doc.select(r#"script[type="application/ld+json"]"#).nodes() {
        let script_sel = Selection::from(*script);
        let json_text = dom::text_content(&script_sel).trim().to_string();

        if json_text.is_empty() {
            continue;
        }

        let data: Value = match serde_json::from_str(&json_text) {
            Ok(v) => v,
            Err(err) => {
                debug!(%err, "skipping malformed JSON-LD block");
                continue;
            }
        };

        for posting in job_postings(&data) {
            if metadata.organization.is_none() {
                metadata.organization = organization_name(posting);
            }
            if metadata.title.is_none() {
                metadata.title = string_value(posting.get("title"));
            }
        }

        if metadata.organization.is_some() && metadata.title.is_some() {
            break;
        }
    }

    metadata
}

/// `JobPosting` objects in one parsed block, in order.
fn job_postings(data: &Value) -> Vec<&Map<String, Value>> {
    let items: Vec<&Value> = match data {
        Value::Array(arr) => arr.iter().collect(),
        other => vec![other],
    };

    let mut postings = Vec::new();
    for item in items {
        let Some(obj) = item.as_object() else {
            continue;
        };

        if is_job_posting(obj) {
            postings.push(obj);
            continue;
        }

        match obj.get("@graph") {
            Some(Value::Array(graph)) => {
                postings.extend(graph.iter().filter_map(Value::as_object).filter(|o| is_job_posting(o)));
            }
            Some(Value::Object(single)) if is_job_posting(single) => postings.push(single),
            _ => {}
        }
    }
    postings
}

/// Whether `@type` names a JobPosting (string or array form).
fn is_job_posting(obj: &Map<String, Value>) -> bool {
    match obj.get("@type") {
        Some(Value::String(t)) => t == "JobPosting",
        Some(Value::Array(types)) => types.iter().any(|t| t.as_str() == Some("JobPosting")),
        _ => false,
    }
}

/// Organization name from the first sub-field that yields one.
fn organization_name(posting: &Map<String, Value>) -> Option<String> {
    ORGANIZATION_KEYS.iter().find_map(|key| {
        let name = match posting.get(*key)? {
            Value::Object(org) => org.get("name"),
            plain @ Value::String(_) => Some(plain),
            _ => None,
        };
        string_value(name)
    })
}

/// Whitespace-collapsed string longer than one character.
fn string_value(value: Option<&Value>) -> Option<String> {
    let s = normalize::collapse_whitespace(value?.as_str()?);
    (s.chars().count() > 1).then_some(s)
}
