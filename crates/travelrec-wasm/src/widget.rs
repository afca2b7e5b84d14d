// crates/travelrec-wasm/src/widget.rs
use std::cell::RefCell;
use std::rc::Rc;

use travelrec_core::loader::DEFAULT_RESOURCE;
use travelrec_core::{ResultsView, SearchController};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{console, Document, Element, Event};

use crate::dom::{self, PageBindings};
use crate::fetch::spawn_load;

/// The search box, its buttons and the data they search.
///
/// Built once per page. Listeners hold an `Rc` to the widget, so it lives as
/// long as the page does.
#[derive(Debug)]
pub struct SearchWidget {
    document: Document,
    bindings: PageBindings,
    controller: Rc<RefCell<SearchController>>,
}

impl SearchWidget {
    /// Binds to the page and starts the one background fetch.
    pub fn mount(
        document: Document,
        controller: Rc<RefCell<SearchController>>,
    ) -> Option<Rc<Self>> {
        let widget = Self::attach(document, controller)?;
        spawn_load(DEFAULT_RESOURCE, widget.controller.clone());
        Some(widget)
    }

    /// Binds listeners without fetching anything; the caller supplies the
    /// data through `controller`.
    pub fn attach(
        document: Document,
        controller: Rc<RefCell<SearchController>>,
    ) -> Option<Rc<Self>> {
        let bindings = PageBindings::discover(&document)?;
        let widget = Rc::new(Self {
            document,
            bindings,
            controller,
        });

        let on_search = widget.clone();
        listen(&widget.bindings.search_button, move |e| {
            e.prevent_default();
            on_search.search();
        });

        let on_clear = widget.clone();
        listen(&widget.bindings.clear_button, move |e| {
            e.prevent_default();
            on_clear.clear();
        });

        Some(widget)
    }

    pub fn controller(&self) -> &Rc<RefCell<SearchController>> {
        &self.controller
    }

    /// Reads the input and renders the matches. Does nothing until the data
    /// has loaded.
    pub fn search(&self) {
        let keyword = self.bindings.input.value();
        let Some(results) = self.controller.borrow().search(&keyword) else {
            console::warn_1(&"Recommendations data not yet loaded".into());
            return;
        };
        if let Err(e) = dom::render(&self.document, &ResultsView::now(&results)) {
            console::error_1(&e.to_string().into());
        }
    }

    /// Empties the input and the results panel.
    pub fn clear(&self) {
        self.bindings.input.set_value("");
        dom::clear_results(&self.document);
    }
}

fn listen(target: &Element, handler: impl FnMut(Event) + 'static) {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    if let Err(e) = target.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
    {
        console::error_2(&"Failed to attach click listener:".into(), &e);
    }
    // Listeners stay for the page's lifetime.
    closure.forget();
}
