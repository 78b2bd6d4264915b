//! The query-to-results pipeline.
//!
//! Orchestrates index acquisition, query execution, and resolution of
//! ranked hits back to page records. Everything is constructed fresh per
//! invocation; nothing persists between searches.

use std::future::Future;

use tracing::{debug, info};

use crate::{IndexBuilder, PageRecord, Result, SearchQuery};

/// What the UI should display after a search invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderInstruction {
    /// The address carried no query; display the empty-state text.
    NoQuerySupplied,

    /// The query matched nothing; display it back to the user.
    NoMatches {
        /// The normalized query that produced no results.
        query: String,
    },

    /// Matching pages, most relevant first.
    Results {
        /// Links to display, in engine ranking order.
        items: Vec<ResultItem>,
    },
}

/// One rendered search result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultItem {
    /// Navigation target.
    pub href: String,

    /// Link label.
    pub title: String,
}

/// Run one search invocation against a freshly built index.
///
/// The document index is acquired through `load_index` only when the
/// normalized query is non-empty. Acquisition failures propagate to the
/// caller and are never folded into the "no matches" state.
pub async fn run_search<E, L, Fut>(
    raw_query: &str,
    load_index: L,
    engine: &mut E,
) -> Result<RenderInstruction>
where
    E: IndexBuilder,
    L: FnOnce() -> Fut,
    Fut: Future<Output = Result<Vec<PageRecord>>>,
{
    let query = SearchQuery::from_raw(raw_query);
    if query.is_empty() {
        return Ok(RenderInstruction::NoQuerySupplied);
    }

    let records = load_index().await?;
    for record in &records {
        engine.add_document(record)?;
    }

    let hits = engine.search(&query.engine_query())?;

    // Hits reference documents by key; map each back to the loaded record
    // and drop any the loaded sequence no longer agrees with.
    let items: Vec<ResultItem> = hits
        .iter()
        .filter_map(|hit| {
            let record = records.iter().find(|record| record.href == hit.href);
            if record.is_none() {
                debug!(href = %hit.href, "Dropping hit with no matching record");
            }
            record
        })
        .map(|record| ResultItem {
            href: record.href.clone(),
            title: record.title.clone(),
        })
        .collect();

    info!(
        query = %query.normalized,
        results = items.len(),
        "Search complete"
    );

    if items.is_empty() {
        Ok(RenderInstruction::NoMatches {
            query: query.normalized,
        })
    } else {
        Ok(RenderInstruction::Results { items })
    }
}
