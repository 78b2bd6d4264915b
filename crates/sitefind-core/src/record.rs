//! Page records loaded from the document index.

use serde::{Deserialize, Serialize};

use crate::{Result, SearchError};

/// One entry in the document index.
///
/// `href` doubles as the record's unique key and its navigation target. If
/// two records share an `href`, the later one shadows the earlier in the
/// searchable index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRecord {
    /// Unique identifier and navigation target.
    pub href: String,

    /// Human-readable label shown in results.
    pub title: String,

    /// Full text used for matching; never displayed.
    pub content: String,
}

/// Parse the document index from its JSON representation.
///
/// The index is a JSON array of records with string fields `href`, `title`
/// and `content`. Anything else is an acquisition failure.
pub fn parse_records(json: &str) -> Result<Vec<PageRecord>> {
    serde_json::from_str(json).map_err(|e| SearchError::Acquisition(e.to_string()))
}
