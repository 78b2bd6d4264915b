//! Page wiring for the search box.
//!
//! Reads the query from the address bar, mirrors it into the search input,
//! installs the keyboard shortcut and hint toggling, and runs one search
//! against a freshly built index.

use sitefind_core::{RenderInstruction, Result, extract_query, run_search};
use sitefind_engine::{EngineConfig, TantivyIndex};
use wasm_bindgen::{JsCast, JsValue, prelude::Closure};
use web_sys::{Document, Element, HtmlElement, HtmlInputElement, KeyboardEvent, Window};

use crate::{loader::fetch_index, render::DomRenderer};

/// Browser wiring configuration.
#[derive(Debug, Clone)]
pub struct SearchPageConfig {
    /// URL of the JSON document index.
    pub index_url: String,

    /// Element id of the search input.
    pub input_id: String,

    /// Element id of the results container.
    pub results_id: String,

    /// Selector for the keyboard hint shown next to the input.
    pub hint_selector: String,
}

impl Default for SearchPageConfig {
    fn default() -> Self {
        Self {
            index_url: "/index.json".to_string(),
            input_id: "search".to_string(),
            results_id: "search-results".to_string(),
            hint_selector: ".search-wrapper kbd".to_string(),
        }
    }
}

/// The mounted search page.
pub struct SearchPage {
    config: SearchPageConfig,
    renderer: DomRenderer,
    raw_query: String,
}

impl SearchPage {
    /// Locate the page elements and wire up input behavior.
    ///
    /// Fails if the search input or results container is missing from the
    /// document.
    pub fn mount(config: SearchPageConfig) -> std::result::Result<Self, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let input = document
            .get_element_by_id(&config.input_id)
            .ok_or_else(|| JsValue::from_str("search input not found"))?
            .dyn_into::<HtmlInputElement>()?;

        let results = document
            .get_element_by_id(&config.results_id)
            .ok_or_else(|| JsValue::from_str("results container not found"))?;

        let raw_query = extract_query(&window.location().search()?);

        // Mirror the address-bar query into the input
        input.set_value(&raw_query);

        install_focus_shortcut(&window, &document, &input)?;
        install_hint_toggle(&document, &input, &config.hint_selector)?;

        Ok(Self {
            config,
            renderer: DomRenderer::new(results),
            raw_query,
        })
    }

    /// The raw query extracted from the address bar.
    pub fn raw_query(&self) -> &str {
        &self.raw_query
    }

    /// Run one search invocation and render its outcome.
    ///
    /// Acquisition and engine failures propagate; the results container is
    /// left untouched in that case.
    pub async fn execute(&self) -> Result<RenderInstruction> {
        let mut engine = TantivyIndex::new(EngineConfig::default())?;
        let url = self.config.index_url.clone();

        let instruction = run_search(
            &self.raw_query,
            move || async move { fetch_index(&url).await },
            &mut engine,
        )
        .await?;

        self.renderer.apply(&instruction);
        Ok(instruction)
    }
}

/// `/` clears and focuses the search input unless it already has focus.
fn install_focus_shortcut(
    window: &Window,
    document: &Document,
    input: &HtmlInputElement,
) -> std::result::Result<(), JsValue> {
    let document = document.clone();
    let input = input.clone();
    let input_el: Element = input.clone().into();

    let handler = Closure::<dyn Fn(KeyboardEvent)>::new(move |ev: KeyboardEvent| {
        let focused = document.active_element().is_some_and(|el| el == input_el);
        if ev.key() == "/" && !focused {
            ev.prevent_default();
            input.set_value("");
            let _ = input.focus();
        }
    });

    window.add_event_listener_with_callback("keydown", handler.as_ref().unchecked_ref())?;

    // Leak the closure to keep it alive
    handler.forget();
    Ok(())
}

/// Hide the keyboard hint while the input is focused, restore it on blur.
fn install_hint_toggle(
    document: &Document,
    input: &HtmlInputElement,
    hint_selector: &str,
) -> std::result::Result<(), JsValue> {
    let Some(hint) = document
        .query_selector(hint_selector)?
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        // Page carries no hint element; nothing to toggle
        return Ok(());
    };

    let hidden = hint.clone();
    let on_focus = Closure::<dyn Fn()>::new(move || {
        let _ = hidden.style().set_property("display", "none");
    });
    input.add_event_listener_with_callback("focus", on_focus.as_ref().unchecked_ref())?;
    on_focus.forget();

    let on_blur = Closure::<dyn Fn()>::new(move || {
        let _ = hint.style().remove_property("display");
    });
    input.add_event_listener_with_callback("blur", on_blur.as_ref().unchecked_ref())?;
    on_blur.forget();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = SearchPageConfig::default();
        assert_eq!(config.index_url, "/index.json");
        assert_eq!(config.input_id, "search");
        assert_eq!(config.results_id, "search-results");
        assert_eq!(config.hint_selector, ".search-wrapper kbd");
    }
}
