//! Character encoding detection and transcoding.
//!
//! Saved job pages arrive as raw bytes in whatever charset the site served.
//! The encoding is taken from a byte-order mark if there is one, then from a
//! `<meta>` charset declaration near the top of the document, and defaults
//! to UTF-8.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;

/// How far into the document a charset declaration is looked for.
const SNIFF_LEN: usize = 1024;

/// `charset=` inside a `<meta>` tag.
///
/// Covers both `<meta charset="...">` and the `http-equiv` form, whose
/// `content` attribute ends in `; charset=...`.
static META_CHARSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s;>/]+)"#).expect("META_CHARSET regex")
});

/// Detect the character encoding of HTML bytes.
#[must_use]
pub fn detect_encoding(html: &[u8]) -> &'static Encoding {
    if let Some((encoding, _bom_len)) = Encoding::for_bom(html) {
        return encoding;
    }

    let head = String::from_utf8_lossy(&html[..html.len().min(SNIFF_LEN)]);
    declared_charset(&head)
        .and_then(|label| Encoding::for_label(label.as_bytes()))
        .unwrap_or(UTF_8)
}

/// Charset label declared in a `<meta>` tag, if any.
fn declared_charset(head: &str) -> Option<String> {
    META_CHARSET
        .captures(head)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

/// Decode HTML bytes to a UTF-8 string.
///
/// A leading byte-order mark is stripped. Invalid sequences become U+FFFD;
/// decoding never fails.
///
/// # Examples
///
/// ```
/// use rs_jobscrape::encoding::decode_page;
///
/// let html = b"<html><body>Hello, World!</body></html>";
/// assert_eq!(decode_page(html), "<html><body>Hello, World!</body></html>");
/// ```
#[must_use]
pub fn decode_page(html: &[u8]) -> String {
    let encoding = detect_encoding(html);
    let (decoded, _encoding_used, _had_errors) = encoding.decode(html);
    decoded.into_owned()
}
