//! travelrec-wasm — the travel recommendation search widget for the browser
//!
//! This crate wires `travelrec-core` into an existing page. On module load
//! it finds the search form, fetches `travel_recommendation_api.json` once
//! and answers clicks on the search and clear buttons.
//!
//! Expected page structure
//! -----------------------
//! - `#search-form` (or the first `form` inside `#navbar`)
//! - `#search-input` (or `input[type="search"]` inside the form)
//! - `#search-button` (or `button[type="submit"]`)
//! - `#clear-button` (or `button[type="button"]`)
//! - `#main-content`, after which `#search-results` is created on demand
//!
//! Quick start (browser)
//! ---------------------
//! ```javascript
//! import init, { is_ready, search } from './pkg/travelrec_wasm.js';
//!
//! await init(); // binds the widget and starts the fetch
//! if (is_ready()) {
//!   console.log(search('japan')); // [{ name: "Japan" }]
//! }
//! ```
//!
//! Notes
//! -----
//! - A missing form aborts initialization with a console warning; no fetch
//!   is made in that case.
//! - Fetch and parse failures are logged with `console.error` and leave the
//!   widget loading for good. Searching then only warns.
//! - See `www/index.html` for a page that works with `trunk serve`.
use std::cell::RefCell;
use std::rc::Rc;

use travelrec_core::{timezone, SearchController};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

pub mod dom;
pub mod fetch;
pub mod widget;

pub use widget::SearchWidget;

thread_local! {
    // The page's single controller; `Loading` until the fetch completes.
    static CONTROLLER: Rc<RefCell<SearchController>> = Rc::new(RefCell::new(SearchController::new()));
}

fn controller() -> Rc<RefCell<SearchController>> {
    CONTROLLER.with(Rc::clone)
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    web_sys::console::log_1(&"Initializing travel search widget...".into());

    let document = match dom::document() {
        Ok(doc) => doc,
        Err(e) => {
            web_sys::console::warn_1(&e.to_string().into());
            return;
        }
    };

    if document.ready_state() == "loading" {
        let deferred = Closure::once_into_js(move || {
            if let Ok(doc) = dom::document() {
                SearchWidget::mount(doc, controller());
            }
        });
        if let Err(e) = document
            .add_event_listener_with_callback("DOMContentLoaded", deferred.unchecked_ref())
        {
            web_sys::console::error_2(&"Failed to wait for DOMContentLoaded:".into(), &e);
        }
    } else {
        SearchWidget::mount(document, controller());
    }
}

/* --------------------------------------------------------------------------
   Programmatic access
-------------------------------------------------------------------------- */

/// `true` once the recommendation document has loaded.
#[wasm_bindgen]
pub fn is_ready() -> bool {
    controller().borrow().is_ready()
}

/// Runs a search without touching the page.
///
/// Returns an array of `{ name, imageUrl?, description? }`, or `null` while
/// the data is still loading.
#[wasm_bindgen]
pub fn search(keyword: &str) -> JsValue {
    let Some(results) = controller().borrow().search(keyword) else {
        return JsValue::NULL;
    };

    let array = js_sys::Array::new();
    for result in &results {
        if let Ok(v) = serde_wasm_bindgen::to_value(result) {
            array.push(&v);
        }
    }
    array.into()
}

/// `hh:mm AM` in the destination's zone, if the name mentions one of the
/// known countries.
#[wasm_bindgen]
pub fn local_time(name: &str) -> Option<String> {
    timezone::local_time(name)
}
