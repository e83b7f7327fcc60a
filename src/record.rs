//! Saved-job records.
//!
//! A [`SavedJob`] wraps one [`ExtractionResult`] in the shape a job tracker
//! stores: an id, a flat map of display-named fields and a creation time.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::result::ExtractionResult;

/// Status given to newly saved jobs.
pub const DEFAULT_STATUS: &str = "Applied";

/// Display names of the record fields.
pub mod keys {
    pub const TITLE: &str = "Title";
    pub const COMPANY: &str = "Company";
    pub const DESCRIPTION: &str = "Description";
    pub const URL: &str = "URL";
    pub const DOMAIN: &str = "Domain";
    pub const SALARY: &str = "Salary";
    pub const DATE_ADDED: &str = "Date Added";
    pub const STATUS: &str = "Status";
}

/// One saved job posting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedJob {
    /// Millisecond timestamp of creation, as a string.
    pub id: String,

    /// Field values keyed by display name.
    pub fields: BTreeMap<String, String>,

    /// Creation time.
    pub created_time: DateTime<Utc>,
}

impl SavedJob {
    /// Record for `result`, created at its scrape time.
    #[must_use]
    pub fn from_result(result: &ExtractionResult) -> Self {
        Self::new(result, result.scraped_at)
    }

    /// Record for `result` created at `created`.
    #[must_use]
    pub fn new(result: &ExtractionResult, created: DateTime<Utc>) -> Self {
        let fields = [
            (keys::TITLE, result.title.as_str()),
            (keys::COMPANY, result.company.as_str()),
            (keys::DESCRIPTION, result.description.as_str()),
            (keys::URL, result.url.as_str()),
            (keys::DOMAIN, result.domain.as_str()),
            (keys::SALARY, result.salary.as_str()),
            (keys::STATUS, DEFAULT_STATUS),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .chain([(keys::DATE_ADDED.to_string(), created.format("%Y-%m-%d").to_string())])
        .collect();

        Self {
            id: created.timestamp_millis().to_string(),
            fields,
            created_time: created,
        }
    }

    /// Value of one field, empty if unset.
    #[must_use]
    pub fn field(&self, key: &str) -> &str {
        self.fields.get(key).map_or("", String::as_str)
    }

    /// Replace the tracking status.
    #[must_use]
    pub fn with_status(mut self, status: &str) -> Self {
        self.fields.insert(keys::STATUS.to_string(), status.to_string());
        self
    }
}

impl From<&ExtractionResult> for SavedJob {
    fn from(result: &ExtractionResult) -> Self {
        Self::from_result(result)
    }
}
