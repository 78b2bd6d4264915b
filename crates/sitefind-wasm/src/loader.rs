//! Document index acquisition over HTTP.

use gloo_net::http::Request;
use sitefind_core::{PageRecord, Result, SearchError, parse_records};

/// Fetch and parse the document index.
///
/// Any transport or parse failure is an acquisition failure for the caller
/// to report; it is never folded into an empty result set.
pub async fn fetch_index(url: &str) -> Result<Vec<PageRecord>> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| SearchError::Acquisition(format!("Network error: {e}")))?;

    if !response.ok() {
        return Err(SearchError::Acquisition(format!(
            "Failed to load index: HTTP {}",
            response.status()
        )));
    }

    let json = response
        .text()
        .await
        .map_err(|e| SearchError::Acquisition(format!("Failed to read response: {e}")))?;

    parse_records(&json)
}
