//! Search schema definition for Tantivy.
//!
//! Defines the searchable fields (`title`, `content`) and the `href`
//! reference key.

use tantivy::{
    Index,
    schema::{
        Field, IndexRecordOption, STORED, STRING, Schema, SchemaBuilder, TextFieldIndexing,
        TextOptions,
    },
    tokenizer::{LowerCaser, SimpleTokenizer, TextAnalyzer},
};

/// Search schema field references.
#[derive(Debug, Clone)]
pub struct SearchFields {
    /// Page reference key (STRING | STORED).
    pub href: Field,

    /// Page title (TEXT).
    pub title: Field,

    /// Page body content (TEXT).
    pub content: Field,
}

/// Create the search schema.
///
/// Returns the schema and field references for indexing.
pub fn create_search_schema() -> (Schema, SearchFields) {
    let mut builder = SchemaBuilder::new();

    // Reference key: exact match, stored so hits can name their document
    let href = builder.add_text_field("href", STRING | STORED);

    // Title and content: full-text searchable, not stored (result display
    // data is resolved from the loaded records, not retrieved from the
    // engine)
    let text_options = TextOptions::default().set_indexing_options(
        TextFieldIndexing::default()
            .set_tokenizer("default")
            .set_index_option(IndexRecordOption::WithFreqsAndPositions),
    );
    let title = builder.add_text_field("title", text_options.clone());
    let content = builder.add_text_field("content", text_options);

    let schema = builder.build();
    let fields = SearchFields {
        href,
        title,
        content,
    };

    (schema, fields)
}

/// Register the tokenizer used by the text fields.
///
/// Simple word splitting with lowercase normalization.
pub fn register_tokenizers(index: &Index) {
    let tokenizer = TextAnalyzer::builder(SimpleTokenizer::default())
        .filter(LowerCaser)
        .build();

    index.tokenizers().register("default", tokenizer);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_schema() {
        let (schema, fields) = create_search_schema();

        assert!(schema.get_field("href").is_ok());
        assert!(schema.get_field("title").is_ok());
        assert!(schema.get_field("content").is_ok());

        assert_eq!(fields.href, schema.get_field("href").unwrap());
        assert_eq!(fields.title, schema.get_field("title").unwrap());
        assert_eq!(fields.content, schema.get_field("content").unwrap());
    }

    #[test]
    fn test_fields_are_indexed() {
        let (schema, fields) = create_search_schema();

        assert!(schema.get_field_entry(fields.href).is_indexed());
        assert!(schema.get_field_entry(fields.title).is_indexed());
        assert!(schema.get_field_entry(fields.content).is_indexed());
    }

    #[test]
    fn test_register_tokenizers() {
        let (schema, _) = create_search_schema();
        let index = Index::create_in_ram(schema);

        register_tokenizers(&index);

        assert!(index.tokenizers().get("default").is_some());
    }
}
