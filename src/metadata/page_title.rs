//! Page Title Parsing
//!
//! Career pages commonly title themselves `Role at Company` or
//! `Role | Company`; the company part is the last-resort company source.

use dom_query::Document;

use crate::dom;
use crate::normalize;
use crate::patterns::{TITLE_AT_COMPANY, TITLE_PIPE_COMPANY};

/// Text of the document `<title>`, whitespace-collapsed.
#[must_use]
pub fn page_title(doc: &Document) -> String {
    let title_elem = doc.select("title");
    if title_elem.is_empty() {
        return String::new();
    }
    normalize::collapse_whitespace(&dom::text_content(&title_elem.first()))
}

/// Company named by an `at X` or `| X` pattern in a page title.
///
/// The `at` form is tried first; the capture stops at the next `|`, `•` or
/// `-` separator.
#[must_use]
pub fn company_from_page_title(title: &str) -> Option<String> {
    [&*TITLE_AT_COMPANY, &*TITLE_PIPE_COMPANY]
        .into_iter()
        .find_map(|pattern| pattern.captures(title))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|company| !company.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_title_text() {
        let doc = Document::from("<html><head><title>  Data Engineer\n at  Acme </title></head></html>");
        assert_eq!(page_title(&doc), "Data Engineer at Acme");
    }

    #[test]
    fn test_page_title_missing() {
        let doc = Document::from("<html><body><p>x</p></body></html>");
        assert_eq!(page_title(&doc), "");
    }

    #[test]
    fn test_at_pattern() {
        assert_eq!(
            company_from_page_title("Staff Engineer at Initech - Careers").as_deref(),
            Some("Initech")
        );
    }

    #[test]
    fn test_pipe_pattern() {
        assert_eq!(
            company_from_page_title("Staff Engineer | Globex • Jobs").as_deref(),
            Some("Globex")
        );
    }

    #[test]
    fn test_at_preferred_over_pipe() {
        assert_eq!(
            company_from_page_title("Engineer at Hooli | Job Board").as_deref(),
            Some("Hooli")
        );
    }

    #[test]
    fn test_no_pattern() {
        assert!(company_from_page_title("Careers").is_none());
        assert!(company_from_page_title("").is_none());
        assert!(company_from_page_title("Role | ").is_none());
    }
}
