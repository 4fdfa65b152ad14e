//! Utility functions and helpers.

pub mod http;

use url::Url;

use crate::error::Result;

/// Build the absolute URL of a remote resource.
///
/// `path` may carry its own query (e.g. `committees?pageNumber=2`); the
/// `format` selector is appended after it.
pub fn resource_url(base: &Url, path: &str, format: &str) -> Result<Url> {
    let mut url = with_trailing_slash(base).join(path.trim_start_matches('/'))?;
    url.query_pairs_mut().append_pair("format", format);
    Ok(url)
}

/// Canonical address of a committee resource, without a format selector.
pub fn committee_url(base: &Url, id: u64) -> String {
    format!("{}/committees/{}", base.as_str().trim_end_matches('/'), id)
}

/// Ensure a base URL joins relative paths below its last segment.
fn with_trailing_slash(base: &Url) -> Url {
    let mut base = base.clone();
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    base
}

/// Escape text for inclusion in HTML element content or attribute values.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
