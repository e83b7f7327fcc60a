//! URL Utility Functions
//!
//! Page-URL helpers: the `domain` field, the domain block list checked before
//! a page is scraped, and the company slug carried in hosted ATS URLs.

use url::Url;

use crate::error::{Error, Result};

/// Hosted ATS domains whose URLs carry the company slug.
const SLUG_HOSTS: &[&str] = &["workable.com"];

/// Subdomains of a slug host that are shared, not per company.
const SHARED_SUBDOMAINS: &[&str] = &["apply", "www", "jobs"];

/// Parse an absolute http(s) URL with a host.
///
/// # Returns
/// * `Some(Url)` if valid absolute URL, `None` otherwise
#[must_use]
pub fn parse_url(url_str: &str) -> Option<Url> {
    let s = url_str.trim();
    if !s.starts_with("http://") && !s.starts_with("https://") {
        return None;
    }

    Url::parse(s).ok().filter(|url| url.host_str().is_some())
}

/// Parse a page URL, reporting why it was rejected.
///
/// # Errors
/// Returns [`Error::InvalidUrl`] when the string is not an absolute http(s)
/// URL with a host.
pub fn require_url(url_str: &str) -> Result<Url> {
    parse_url(url_str).ok_or_else(|| Error::InvalidUrl(url_str.trim().to_string()))
}

/// Lowercase hostname of a URL, or an empty string if it does not parse.
#[must_use]
pub fn extract_domain(url_str: &str) -> String {
    parse_url(url_str)
        .and_then(|url| url.host_str().map(str::to_ascii_lowercase))
        .unwrap_or_default()
}

/// Whether `host` is `domain` or one of its subdomains.
fn host_matches(host: &str, domain: &str) -> bool {
    let domain = domain.trim().trim_start_matches('.').to_ascii_lowercase();
    if domain.is_empty() {
        return false;
    }
    host == domain
        || host
            .strip_suffix(domain.as_str())
            .is_some_and(|prefix| prefix.ends_with('.'))
}

/// Check a page URL against a domain block list.
///
/// A URL is blocked when its host equals a listed domain or is a subdomain of
/// one, compared case-insensitively. URLs that do not parse are never blocked.
///
/// # Examples
/// ```
/// use rs_jobscrape::url_utils::is_blocked_domain;
///
/// let blocked = ["jobs.example"];
/// assert!(is_blocked_domain("https://www.jobs.example/view/1", &blocked));
/// assert!(!is_blocked_domain("https://notjobs.example/", &blocked));
/// assert!(!is_blocked_domain("not a url", &blocked));
/// ```
#[must_use]
pub fn is_blocked_domain(url_str: &str, blocked: &[&str]) -> bool {
    let host = extract_domain(url_str);
    !host.is_empty() && blocked.iter().any(|domain| host_matches(&host, domain))
}

/// Refuse a page before extraction when its domain is blocked.
///
/// An empty block list lets everything through, including a missing URL.
///
/// # Errors
/// * [`Error::InvalidUrl`] when a block list is set and the URL does not parse
/// * [`Error::BlockedDomain`] when the URL's host is on the list
pub fn guard_domain(url_str: &str, blocked: &[&str]) -> Result<()> {
    if blocked.is_empty() {
        return Ok(());
    }

    let url = require_url(url_str)?;
    if is_blocked_domain(url.as_str(), blocked) {
        return Err(Error::BlockedDomain(extract_domain(url.as_str())));
    }
    Ok(())
}

/// Company name carried in a hosted ATS URL.
///
/// `https://apply.workable.com/acme-robotics/j/1A2B/` gives `Acme Robotics`;
/// a per-company subdomain (`https://acme-robotics.workable.com/`) works too.
#[must_use]
pub fn company_from_url_slug(url_str: &str) -> Option<String> {
    let url = parse_url(url_str)?;
    let host = url.host_str()?.to_ascii_lowercase();
    let base = SLUG_HOSTS.iter().find(|h| host_matches(&host, h))?;

    let subdomain = host
        .strip_suffix(*base)
        .map(|prefix| prefix.trim_end_matches('.'))
        .filter(|sub| !sub.is_empty() && !SHARED_SUBDOMAINS.contains(sub));

    let slug = match subdomain {
        Some(sub) => sub.to_string(),
        None => url.path_segments()?.find(|seg| !seg.is_empty())?.to_string(),
    };

    let name = title_case_slug(&slug);
    (!name.is_empty()).then_some(name)
}

/// `acme-robotics` → `Acme Robotics`.
fn title_case_slug(slug: &str) -> String {
    slug.split(['-', '_'])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars).collect()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_url() {
        assert!(parse_url("https://example.com/page").is_some());
        assert!(parse_url("  https://example.com/path  ").is_some());
        assert!(parse_url("/relative").is_none());
        assert!(parse_url("example.com").is_none());
        assert!(parse_url("ftp://example.com").is_none()); // Only http/https
        assert!(parse_url("").is_none());
    }

    #[test]
    fn test_require_url() {
        assert!(require_url("https://example.com").is_ok());
        assert!(matches!(require_url("nope"), Err(Error::InvalidUrl(s)) if s == "nope"));
    }

    #[test]
    fn test_extract_domain() {
        assert_eq!(extract_domain("https://Boards.Greenhouse.io/acme/jobs/1"), "boards.greenhouse.io");
        assert_eq!(extract_domain("http://example.com:8080/path"), "example.com");
        assert_eq!(extract_domain("/relative"), "");
        assert_eq!(extract_domain(""), "");
    }

    #[test]
    fn test_is_blocked_domain() {
        let blocked = ["blocked.example"];
        assert!(is_blocked_domain("https://blocked.example/jobs", &blocked));
        assert!(is_blocked_domain("https://WWW.Blocked.Example/jobs", &blocked));
        assert!(is_blocked_domain("https://a.b.blocked.example", &blocked));
        assert!(!is_blocked_domain("https://notblocked.example", &blocked));
        assert!(!is_blocked_domain("https://blocked.example.org", &blocked));
        assert!(!is_blocked_domain("garbage", &blocked));
        assert!(!is_blocked_domain("https://blocked.example", &[]));
    }

    #[test]
    fn test_guard_domain() {
        let blocked = ["blocked.example"];
        assert!(guard_domain("https://ok.example/job", &blocked).is_ok());
        assert!(guard_domain("", &[]).is_ok());
        assert!(matches!(
            guard_domain("https://jobs.blocked.example/1", &blocked),
            Err(Error::BlockedDomain(host)) if host == "jobs.blocked.example"
        ));
        assert!(matches!(guard_domain("not a url", &blocked), Err(Error::InvalidUrl(_))));
    }

    #[test]
    fn test_company_from_url_slug() {
        assert_eq!(
            company_from_url_slug("https://apply.workable.com/acme-robotics/j/1A2B3C/").as_deref(),
            Some("Acme Robotics")
        );
        assert_eq!(
            company_from_url_slug("https://globex-corp.workable.com/jobs/42").as_deref(),
            Some("Globex Corp")
        );
        assert_eq!(company_from_url_slug("https://apply.workable.com/"), None);
        assert_eq!(company_from_url_slug("https://example.com/acme"), None);
        assert_eq!(company_from_url_slug("https://notworkable.com/acme"), None);
    }

    #[test]
    fn test_title_case_slug() {
        assert_eq!(title_case_slug("initech"), "Initech");
        assert_eq!(title_case_slug("--a-b--"), "A B");
        assert_eq!(title_case_slug(""), "");
    }
}
