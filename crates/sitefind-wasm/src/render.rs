//! Rendering of pipeline output into the results container.

use sitefind_core::RenderInstruction;
use web_sys::Element;

/// Render an instruction to its HTML representation.
pub fn render_html(instruction: &RenderInstruction) -> String {
    match instruction {
        RenderInstruction::NoQuerySupplied => "No search query supplied.".to_string(),
        RenderInstruction::NoMatches { query } => {
            format!("No pages match '{}'.", escape_html(query))
        }
        RenderInstruction::Results { items } => {
            let items: String = items
                .iter()
                .map(|item| {
                    format!(
                        "<li><a href=\"{}\">{}</a></li>",
                        escape_html(&item.href),
                        escape_html(&item.title)
                    )
                })
                .collect();

            format!("<ul>{items}</ul>")
        }
    }
}

/// DOM target for search output.
///
/// Rendering always fully replaces the container's contents; there is no
/// incremental patching.
pub struct DomRenderer {
    target: Element,
}

impl DomRenderer {
    /// Wrap the results container element.
    pub fn new(target: Element) -> Self {
        Self { target }
    }

    /// Replace the container's contents with the rendered instruction.
    pub fn apply(&self, instruction: &RenderInstruction) {
        self.target.set_inner_html(&render_html(instruction));
    }
}

/// Escape text for embedding in HTML.
fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use sitefind_core::ResultItem;

    use super::*;

    #[test]
    fn test_render_no_query() {
        let html = render_html(&RenderInstruction::NoQuerySupplied);
        assert_eq!(html, "No search query supplied.");
    }

    #[test]
    fn test_render_no_matches() {
        let html = render_html(&RenderInstruction::NoMatches {
            query: "quince".to_string(),
        });
        assert_eq!(html, "No pages match 'quince'.");
    }

    #[test]
    fn test_render_results_preserves_order() {
        let html = render_html(&RenderInstruction::Results {
            items: vec![
                ResultItem {
                    href: "/a".to_string(),
                    title: "Apple Pie".to_string(),
                },
                ResultItem {
                    href: "/b".to_string(),
                    title: "Banana Bread".to_string(),
                },
            ],
        });

        assert_eq!(
            html,
            "<ul><li><a href=\"/a\">Apple Pie</a></li>\
             <li><a href=\"/b\">Banana Bread</a></li></ul>"
        );
    }

    #[test]
    fn test_render_escapes_markup() {
        let html = render_html(&RenderInstruction::Results {
            items: vec![ResultItem {
                href: "/a?x=1&y=2".to_string(),
                title: "<script>alert('x')</script>".to_string(),
            }],
        });

        assert!(html.contains("/a?x=1&amp;y=2"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_render_escapes_query_echo() {
        let html = render_html(&RenderInstruction::NoMatches {
            query: "<b>bold</b>".to_string(),
        });
        assert_eq!(html, "No pages match '&lt;b&gt;bold&lt;/b&gt;'.");
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("a & b"), "a &amp; b");
        assert_eq!(escape_html("\"quoted\""), "&quot;quoted&quot;");
        assert_eq!(escape_html("it's"), "it&#39;s");
    }
}
