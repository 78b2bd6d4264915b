//! Sitefind Engine
//!
//! Tantivy adapter behind the pipeline's
//! [`IndexBuilder`](sitefind_core::IndexBuilder) seam: schema and tokenizer
//! configuration, in-RAM index construction, and ranked query execution.
//!
//! # Example
//!
//! ```
//! use sitefind_core::{IndexBuilder, PageRecord};
//! use sitefind_engine::{EngineConfig, TantivyIndex};
//!
//! let mut engine = TantivyIndex::new(EngineConfig::default()).unwrap();
//! engine
//!     .add_document(&PageRecord {
//!         href: "/a".to_string(),
//!         title: "Apple Pie".to_string(),
//!         content: "A dessert.".to_string(),
//!     })
//!     .unwrap();
//!
//! let hits = engine.search("+dessert").unwrap();
//! assert_eq!(hits[0].href, "/a");
//! ```

pub mod index;
pub mod schema;

pub use index::{EngineConfig, TantivyIndex};
pub use schema::{SearchFields, create_search_schema, register_tokenizers};
