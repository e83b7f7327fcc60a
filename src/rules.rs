//! Extraction rule tables.
//!
//! Every selector list, phrase list and length bound the engine uses lives in
//! one immutable [`Rules`] value. [`DEFAULT_RULES`] is built at compile time and
//! passed by reference into each component; nothing mutates it at run time.

use crate::result::Field;

/// Immutable configuration data for one extraction pass.
#[derive(Debug, Clone)]
pub struct Rules {
    /// Title hints, most specific first.
    pub title_selectors: &'static [&'static str],

    /// Company hints, most specific first.
    pub company_selectors: &'static [&'static str],

    /// Description hints, most specific first.
    pub description_selectors: &'static [&'static str],

    /// Phrases (lowercase) that disqualify a candidate when contained in it.
    pub blocked_phrases: &'static [&'static str],

    /// Phrases (lowercase) whose presence in a heading marks a description section.
    pub description_headings: &'static [&'static str],

    /// Inclusive minimum length of title/company candidates.
    pub short_min_len: usize,

    /// Exclusive maximum length of title/company candidates.
    pub short_max_len: usize,

    /// Description candidates must be longer than this after cleaning.
    pub description_min_len: usize,

    /// Cap for descriptions found by the selector cascade.
    pub cascade_description_cap: usize,

    /// Cap for descriptions found next to a heading.
    pub heading_description_cap: usize,

    /// Appended to any capped description.
    pub truncation_marker: &'static str,

    /// Number of following siblings the sibling walk inspects.
    pub sibling_limit: usize,

    /// Sibling text shorter than this is skipped by the sibling walk.
    pub sibling_min_len: usize,

    /// The sibling walk stops once it has gathered more than this.
    pub sibling_stop_len: usize,

    /// The container scan stops once it has gathered this much.
    pub container_stop_len: usize,

    /// Characters inspected on each side of a salary match for a unit phrase.
    pub salary_context_window: usize,

    /// Exclusive length bounds of the heading-scan title fallback.
    pub fallback_title_bounds: (usize, usize),
}

impl Rules {
    /// Built-in rule set.
    pub const DEFAULT: Self = Self {
        title_selectors: &[
            "h1",
            r#"[data-qa="posting-title"]"#,
            ".topcard__title",
            ".jobsearch-JobInfoHeader-title",
            ".job-title",
            r#"[class*="job-title"]"#,
            ".posting-headline__position",
        ],
        company_selectors: &[
            r#"[data-qa="posting-company"]"#,
            ".topcard__org-name-link",
            ".jobsearch-InlineCompanyRating",
            ".company-name",
            r#"[class*="company"]"#,
            r#"a[href*="/company/"]"#,
            "[data-company-name]",
            ".topcard__flavor",
            "img + div strong",
            "img + div h3",
            ".logo + div strong",
            ".posting-title + div strong",
        ],
        description_selectors: &[
            r#"[data-qa="job-description"]"#,
            ".description",
            ".jobsearch-jobDescriptionText",
            r#"[class*="job-description"]"#,
            r#"[class*="description"]"#,
            "article",
            "section",
        ],
        blocked_phrases: &[
            "kathryn's story",
            "our story",
            "company story",
            "employee story",
            "people story",
            "success story",
            "view all jobs",
            "see all jobs",
            "benefits",
            "culture",
            "life at",
            "about us",
            "who we are",
        ],
        description_headings: &[
            "about",
            "about the job",
            "about this job",
            "about the role",
            "job description",
            "job summary",
            "description",
            "overview",
            "responsibilities",
            "role description",
            "position summary",
            "the role",
        ],
        short_min_len: 2,
        short_max_len: 300,
        description_min_len: 50,
        cascade_description_cap: 800,
        heading_description_cap: 1000,
        truncation_marker: "...",
        sibling_limit: 5,
        sibling_min_len: 20,
        sibling_stop_len: 200,
        container_stop_len: 300,
        salary_context_window: 40,
        fallback_title_bounds: (5, 200),
    };

    /// Selector list for one field.
    #[must_use]
    pub const fn selectors(&self, field: Field) -> &'static [&'static str] {
        match field {
            Field::Title => self.title_selectors,
            Field::Company => self.company_selectors,
            Field::Description => self.description_selectors,
        }
    }

    /// Whether `text` contains any blocked phrase, ignoring case.
    #[must_use]
    pub fn is_blocked_text(&self, text: &str) -> bool {
        let normalized = text.trim().to_lowercase();
        if normalized.is_empty() {
            return false;
        }
        self.blocked_phrases.iter().any(|p| normalized.contains(p))
    }

    /// Whether `heading` introduces a description section.
    #[must_use]
    pub fn is_description_heading(&self, heading: &str) -> bool {
        let normalized = heading.trim().to_lowercase();
        !normalized.is_empty() && self.description_headings.iter().any(|p| normalized.contains(p))
    }
}

impl Default for Rules {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Process-wide default rule set.
pub static DEFAULT_RULES: Rules = Rules::DEFAULT;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blocked_text_is_case_insensitive_substring() {
        let rules = Rules::default();
        assert!(rules.is_blocked_text("Read OUR STORY here"));
        assert!(rules.is_blocked_text("  Benefits  "));
        assert!(rules.is_blocked_text("Life at Acme"));
        assert!(!rules.is_blocked_text("Senior Platform Engineer"));
        assert!(!rules.is_blocked_text("   "));
    }

    #[test]
    fn test_description_heading_phrases() {
        let rules = Rules::default();
        assert!(rules.is_description_heading("About the Role"));
        assert!(rules.is_description_heading("KEY RESPONSIBILITIES"));
        assert!(rules.is_description_heading("Company Overview"));
        assert!(!rules.is_description_heading("Apply for this job"));
        assert!(!rules.is_description_heading(""));
    }

    #[test]
    fn test_selector_lists_ordered_specific_first() {
        let rules = Rules::default();
        assert_eq!(rules.selectors(Field::Title).first(), Some(&"h1"));
        assert_eq!(
            rules.selectors(Field::Company).first(),
            Some(&r#"[data-qa="posting-company"]"#)
        );
        assert_eq!(rules.selectors(Field::Description).last(), Some(&"section"));
    }

    #[test]
    fn test_default_static_matches_default() {
        assert_eq!(DEFAULT_RULES.short_max_len, Rules::default().short_max_len);
        assert_eq!(DEFAULT_RULES.heading_description_cap, 1000);
    }
}
