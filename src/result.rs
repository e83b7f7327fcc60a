//! Result types for extraction output.
//!
//! `ExtractionResult` is the single record produced per scrape. It is always
//! structurally complete: a field no strategy could fill is an empty string.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A job-posting field targeted by the selector cascade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// Job title.
    Title,
    /// Hiring company.
    Company,
    /// Description body.
    Description,
}

impl Field {
    /// Lowercase field name as used in result maps and log events.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Company => "company",
            Self::Description => "description",
        }
    }

    /// Whether the field is a short single-line value (title, company).
    #[must_use]
    pub const fn is_short(self) -> bool {
        matches!(self, Self::Title | Self::Company)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured job posting extracted from one page.
///
/// Ownership passes to the caller as soon as extraction returns; the engine
/// keeps no reference to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionResult {
    /// Job title.
    pub title: String,

    /// Hiring company name.
    pub company: String,

    /// Cleaned description text, capped with a trailing `...` when truncated.
    pub description: String,

    /// Salary text, e.g. `$120,000 - $150,000 per year` or `$120k /yr`.
    pub salary: String,

    /// Page URL as given by the caller.
    pub url: String,

    /// Lowercase hostname of `url`.
    pub domain: String,

    /// When the page was scraped.
    pub scraped_at: DateTime<Utc>,
}

impl ExtractionResult {
    /// Creates a result with every text field empty.
    #[must_use]
    pub fn empty(scraped_at: DateTime<Utc>) -> Self {
        Self {
            title: String::new(),
            company: String::new(),
            description: String::new(),
            salary: String::new(),
            url: String::new(),
            domain: String::new(),
            scraped_at,
        }
    }

    /// Returns true when none of the extracted fields were filled.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.title.is_empty()
            && self.company.is_empty()
            && self.description.is_empty()
            && self.salary.is_empty()
    }

    /// Flat string-keyed field map handed to record stores.
    #[must_use]
    pub fn to_fields(&self) -> BTreeMap<String, String> {
        let mut fields = BTreeMap::new();
        fields.insert("title".to_string(), self.title.clone());
        fields.insert("company".to_string(), self.company.clone());
        fields.insert("description".to_string(), self.description.clone());
        fields.insert("salary".to_string(), self.salary.clone());
        fields.insert("url".to_string(), self.url.clone());
        fields.insert("domain".to_string(), self.domain.clone());
        fields.insert("scrapedAt".to_string(), self.scraped_at.to_rfc3339());
        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).single().unwrap_or_default()
    }

    #[test]
    fn test_empty_result_is_blank() {
        let result = ExtractionResult::empty(fixed_time());
        assert!(result.is_blank());
        assert_eq!(result.url, "");
        assert_eq!(result.domain, "");
    }

    #[test]
    fn test_to_fields_has_every_key() {
        let result = ExtractionResult {
            title: "Backend Engineer".to_string(),
            ..ExtractionResult::empty(fixed_time())
        };

        let fields = result.to_fields();
        assert_eq!(fields.len(), 7);
        assert_eq!(fields["title"], "Backend Engineer");
        assert_eq!(fields["company"], "");
        assert_eq!(fields["scrapedAt"], "2024-03-01T12:00:00+00:00");
    }

    #[test]
    fn test_serializes_camel_case() {
        let result = ExtractionResult::empty(fixed_time());
        let json = serde_json::to_string(&result).unwrap_or_default();
        assert!(json.contains("\"scrapedAt\""));
        assert!(!json.contains("scraped_at"));
    }

    #[test]
    fn test_field_names() {
        assert_eq!(Field::Title.to_string(), "title");
        assert!(Field::Company.is_short());
        assert!(!Field::Description.is_short());
    }
}
