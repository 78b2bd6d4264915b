//! Query extraction and normalization.
//!
//! The search query lives in the page's addressable state: the `q`
//! parameter of the URL query string. Extraction is a pure function of
//! that string so it can be exercised without a browser.

/// Extract the raw search query from the query-string portion of the page
/// address (e.g. `?q=apple+pie`).
///
/// Parses standard `application/x-www-form-urlencoded` pairs and returns
/// the value bound to `q`, or the empty string when the key is absent.
/// Malformed input degrades to "no value found"; this never fails.
pub fn extract_query(location_search: &str) -> String {
    let pairs = location_search.strip_prefix('?').unwrap_or(location_search);

    form_urlencoded::parse(pairs.as_bytes())
        .find(|(key, _)| key == "q")
        .map(|(_, value)| value.into_owned())
        .unwrap_or_default()
}

/// A search query, derived once per invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    /// Query string exactly as supplied in the URL.
    pub raw: String,

    /// Trimmed, lower-cased form used for matching.
    pub normalized: String,
}

impl SearchQuery {
    /// Derive a query from the raw `q` value.
    pub fn from_raw(raw: &str) -> Self {
        Self {
            raw: raw.to_string(),
            normalized: raw.trim().to_lowercase(),
        }
    }

    /// Whether there is anything to search for.
    pub fn is_empty(&self) -> bool {
        self.normalized.is_empty()
    }

    /// Rewrite the query so that every term is required.
    ///
    /// Splits the normalized query on whitespace, discards empty terms, and
    /// prefixes each remaining term with the engine's required-term marker,
    /// turning the engine's default any-term matching into all-terms
    /// matching.
    pub fn engine_query(&self) -> String {
        self.normalized
            .split_whitespace()
            .map(|term| format!("+{term}"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_query() {
        assert_eq!(extract_query("?q=apple"), "apple");
        assert_eq!(extract_query("?q=apple+pie"), "apple pie");
        assert_eq!(extract_query("?page=2&q=banana"), "banana");
    }

    #[test]
    fn test_extract_query_roundtrip() {
        for raw in ["apple pie", "foo&bar=baz", "50% off?", "+plus+", "crème brûlée"] {
            let encoded = form_urlencoded::Serializer::new(String::new())
                .append_pair("q", raw)
                .finish();
            assert_eq!(extract_query(&format!("?{encoded}")), raw);
        }
    }

    #[test]
    fn test_extract_query_missing() {
        assert_eq!(extract_query(""), "");
        assert_eq!(extract_query("?"), "");
        assert_eq!(extract_query("?page=2"), "");
    }

    #[test]
    fn test_extract_query_degrades_on_malformed_input() {
        assert_eq!(extract_query("?&&==&q"), "");
        assert_eq!(extract_query("?q="), "");
    }

    #[test]
    fn test_normalization() {
        let query = SearchQuery::from_raw("  Apple PIE ");
        assert_eq!(query.raw, "  Apple PIE ");
        assert_eq!(query.normalized, "apple pie");
        assert!(!query.is_empty());
    }

    #[test]
    fn test_whitespace_only_is_empty() {
        assert!(SearchQuery::from_raw("").is_empty());
        assert!(SearchQuery::from_raw("   \t ").is_empty());
    }

    #[test]
    fn test_engine_query_marks_every_term_required() {
        let query = SearchQuery::from_raw("apple dessert");
        assert_eq!(query.engine_query(), "+apple +dessert");
    }

    #[test]
    fn test_engine_query_collapses_repeated_whitespace() {
        let query = SearchQuery::from_raw("  apple   pie ");
        assert_eq!(query.engine_query(), "+apple +pie");
    }
}
