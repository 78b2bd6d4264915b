//! In-memory index construction and query execution.

use sitefind_core::{IndexBuilder, PageRecord, Result, SearchError, SearchHit};
use tantivy::{
    Index, IndexWriter, TantivyDocument, collector::TopDocs, query::QueryParser, schema::Value,
};
use tracing::debug;

use crate::schema::{SearchFields, create_search_schema, register_tokenizers};

/// Configuration for the index writer.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Memory budget for the index writer (in bytes).
    /// Default: 15MB, the writer's floor.
    pub memory_budget: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            memory_budget: 15_000_000,
        }
    }
}

/// Tantivy-backed [`IndexBuilder`].
///
/// Documents accumulate in an in-RAM index; the commit is deferred until
/// the first search. The index lives for one search invocation and is
/// discarded afterwards.
pub struct TantivyIndex {
    index: Index,
    fields: SearchFields,
    writer: IndexWriter,
    doc_count: usize,
    pending: bool,
}

impl TantivyIndex {
    /// Create an empty in-memory index.
    pub fn new(config: EngineConfig) -> Result<Self> {
        let (schema, fields) = create_search_schema();
        let index = Index::create_in_ram(schema);
        register_tokenizers(&index);

        let writer = index
            .writer(config.memory_budget)
            .map_err(|e| SearchError::Index(e.to_string()))?;

        Ok(Self {
            index,
            fields,
            writer,
            doc_count: 0,
            pending: false,
        })
    }

    /// Number of documents added so far.
    pub fn document_count(&self) -> usize {
        self.doc_count
    }

    fn commit(&mut self) -> Result<()> {
        if self.pending {
            self.writer
                .commit()
                .map_err(|e| SearchError::Index(e.to_string()))?;
            self.pending = false;
        }
        Ok(())
    }
}

impl IndexBuilder for TantivyIndex {
    fn add_document(&mut self, record: &PageRecord) -> Result<()> {
        let mut doc = TantivyDocument::new();
        doc.add_text(self.fields.href, &record.href);
        doc.add_text(self.fields.title, &record.title);
        doc.add_text(self.fields.content, &record.content);

        self.writer
            .add_document(doc)
            .map_err(|e| SearchError::Index(e.to_string()))?;

        self.doc_count += 1;
        self.pending = true;

        debug!(href = %record.href, "Indexed page");
        Ok(())
    }

    fn search(&mut self, query: &str) -> Result<Vec<SearchHit>> {
        self.commit()?;

        let reader = self
            .index
            .reader()
            .map_err(|e| SearchError::Index(e.to_string()))?;
        let searcher = reader.searcher();

        let parser =
            QueryParser::for_index(&self.index, vec![self.fields.title, self.fields.content]);
        let parsed = parser
            .parse_query(query)
            .map_err(|e| SearchError::Query(e.to_string()))?;

        // No pagination: every match comes back, ranked
        let limit = self.doc_count.max(1);
        let top_docs = searcher
            .search(&parsed, &TopDocs::with_limit(limit))
            .map_err(|e| SearchError::Query(e.to_string()))?;

        let mut hits = Vec::with_capacity(top_docs.len());
        for (score, address) in top_docs {
            let doc: TantivyDocument = searcher
                .doc(address)
                .map_err(|e| SearchError::Index(e.to_string()))?;

            if let Some(href) = doc.get_first(self.fields.href).and_then(|v| v.as_str()) {
                hits.push(SearchHit {
                    href: href.to_string(),
                    score,
                });
            }
        }

        debug!(query = %query, hits = hits.len(), "Executed query");
        Ok(hits)
    }
}
