//! Sitefind Core Library
//!
//! Query extraction and the search pipeline behind a static site's search
//! box.
//!
//! # Features
//!
//! - **Query extraction**: pull the `q` parameter out of the page address
//! - **Search pipeline**: acquire the document index, match, rank, and map
//!   hits back to page records
//! - **Engine-agnostic**: the full-text engine is injected through the
//!   [`IndexBuilder`] trait
//!
//! # Example
//!
//! ```no_run
//! use sitefind_core::{IndexBuilder, extract_query, parse_records, run_search};
//!
//! # async fn demo(engine: &mut impl IndexBuilder) -> sitefind_core::Result<()> {
//! let query = extract_query("?q=apple+pie");
//! let index_json = r#"[{"href":"/a","title":"Apple Pie","content":"A dessert."}]"#;
//!
//! let instruction = run_search(&query, || async { parse_records(index_json) }, engine).await?;
//! # Ok(())
//! # }
//! ```

pub mod engine;
pub mod pipeline;
pub mod query;
pub mod record;

pub use engine::{IndexBuilder, SearchHit};
pub use pipeline::{RenderInstruction, ResultItem, run_search};
pub use query::{SearchQuery, extract_query};
pub use record::{PageRecord, parse_records};
use thiserror::Error;

/// Search-related errors.
#[derive(Debug, Error)]
pub enum SearchError {
    /// The document index could not be fetched or parsed.
    #[error("Index acquisition failed: {0}")]
    Acquisition(String),

    /// Index construction error.
    #[error("Index error: {0}")]
    Index(String),

    /// Query parsing or execution error.
    #[error("Query error: {0}")]
    Query(String),
}

/// Result type for search operations.
pub type Result<T> = std::result::Result<T, SearchError>;
