//! HTML rendering for the search and statistics pages.

use std::path::Path;

use crate::error::{AppError, Result};
use crate::search::SearchResult;
use crate::storage::Index;
use crate::utils::escape_html;

/// Placeholder a page template must contain for the result rows.
pub const RESULTS_PLACEHOLDER: &str = "{results}";

/// Markup for a single result row.
const ROW_TEMPLATE: &str = "<tr><td>{rank}</td><td><a href=\"{url}\">{name}</a></td>\
<td>{members}</td><td>{matches}</td></tr>";

/// Read the page template from disk.
pub async fn load_template(path: &Path) -> Result<String> {
    tokio::fs::read_to_string(path).await.map_err(|e| {
        AppError::render(format!("failed to read {}: {}", path.display(), e))
    })
}

/// Fill a page template with the query and its results.
///
/// Supported placeholders:
/// - `{query}`: the submitted query, escaped
/// - `{count}`: number of matching committees
/// - `{results}`: one table row per result (required)
pub fn render_page(template: &str, query: &str, results: &[SearchResult]) -> Result<String> {
    if !template.contains(RESULTS_PLACEHOLDER) {
        return Err(AppError::render(format!(
            "template has no {} placeholder",
            RESULTS_PLACEHOLDER
        )));
    }

    let query = escape_html(query);
    let count = results.len().to_string();
    let rows: Vec<String> = results.iter().map(render_row).collect();
    let rows = rows.join("\n");

    Ok(fill(
        template,
        &[
            ("{query}", query.as_str()),
            ("{count}", count.as_str()),
            (RESULTS_PLACEHOLDER, rows.as_str()),
        ],
    ))
}

fn render_row(result: &SearchResult) -> String {
    let rank = result.rank.to_string();
    let url = escape_html(&result.url);
    let name = escape_html(&result.committee_name);
    let members = result.member_count.to_string();
    let matches = result.match_count.to_string();

    fill(
        ROW_TEMPLATE,
        &[
            ("{rank}", rank.as_str()),
            ("{url}", url.as_str()),
            ("{name}", name.as_str()),
            ("{members}", members.as_str()),
            ("{matches}", matches.as_str()),
        ],
    )
}

/// Substitute placeholders in a single pass; inserted values are not rescanned.
fn fill(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        match values.iter().find(|(key, _)| tail.starts_with(key)) {
            Some((key, value)) => {
                out.push_str(value);
                rest = &tail[key.len()..];
            }
            None => {
                out.push('{');
                rest = &tail[1..];
            }
        }
    }

    out.push_str(rest);
    out
}

/// Minimal statistics fragment for the current snapshot.
pub fn render_stats(index: &Index) -> String {
    let refreshed = index
        .refreshed_at()
        .map(|t| t.format("%Y-%m-%d %H:%M:%S UTC").to_string())
        .unwrap_or_else(|| "never".to_string());

    format!(
        "<html><body><h1>Statistics</h1><p>Number of committees: {}</p>\
<p>Last refresh: {}</p></body></html>",
        index.len(),
        refreshed
    )
}
