//! Artist profile URL parsing.
//!
//! Two shapes identify an artist on the streaming platform:
//!
//! - web links: `https://open.<platform>.com/artist/<id>`
//! - URIs: `<platform>:artist:<id>`
//!
//! `<id>` is an alphanumeric token. Anything else yields no identifier; the
//! parser never errors.

use std::sync::LazyLock;

use regex::Regex;

// ---------------------------------------------------------------------------
// Patterns
// ---------------------------------------------------------------------------

/// Web link form. Trailing query strings (`?si=...`) are ignored.
pub const WEB_URL_PATTERN: &str = r"https://open\.[A-Za-z0-9-]+\.com/artist/([A-Za-z0-9]+)";

/// URI form, as produced by the desktop client's "Copy URI".
pub const URI_PATTERN: &str = r"[A-Za-z0-9-]+:artist:([A-Za-z0-9]+)";

static WEB_URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(WEB_URL_PATTERN).expect("valid regex"));

static URI_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(URI_PATTERN).expect("valid regex"));

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

/// Extract the artist identifier from a profile URL or URI.
///
/// Patterns are tried in order and the first match wins. Returns `None` for
/// any other input, including the empty string.
pub fn parse_artist_id(url: &str) -> Option<&str> {
    [&*WEB_URL_RE, &*URI_RE]
        .into_iter()
        .find_map(|re| re.captures(url))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// A URL is valid exactly when [`parse_artist_id`] finds an identifier.
pub fn is_valid_artist_url(url: &str) -> bool {
    parse_artist_id(url).is_some()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
