//! Sitefind Browser Runtime
//!
//! Wires the search pipeline to the page: reads the `q` parameter from the
//! address bar, fetches the document index, runs the query, and renders
//! matching page links into the results container.
//!
//! # Example (JavaScript)
//!
//! ```javascript
//! import init, { run } from 'sitefind-wasm';
//!
//! await init();
//! await run();
//! ```

pub mod loader;
pub mod page;
pub mod render;

pub use loader::fetch_index;
use log::error;
pub use page::{SearchPage, SearchPageConfig};
pub use render::{DomRenderer, render_html};
use wasm_bindgen::prelude::*;

/// Initialize the WASM module.
///
/// Sets up the panic hook and console logging.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
}

/// Get the version of the search runtime.
#[wasm_bindgen(js_name = getVersion)]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Mount the search page and execute one search.
///
/// A failed index acquisition is reported to the console and leaves the
/// results container in its prior state; it is never rendered as an empty
/// result set.
#[wasm_bindgen]
pub async fn run() -> Result<(), JsValue> {
    let page = SearchPage::mount(SearchPageConfig::default())?;

    if let Err(err) = page.execute().await {
        error!("{err}");
    }

    Ok(())
}
