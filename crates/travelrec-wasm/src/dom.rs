// crates/travelrec-wasm/src/dom.rs

//! Page bindings and the results panel.
//!
//! Every text value is written with `set_text_content` or an attribute
//! setter; nothing from the document is parsed as HTML.

use travelrec_core::view::{CardView, ResultsView, LOCAL_TIME_LABEL, NO_RESULTS_MESSAGE};
use travelrec_core::TravelError;
use wasm_bindgen::JsCast;
use web_sys::{console, Document, Element, HtmlImageElement, HtmlInputElement};

pub const RESULTS_ID: &str = "search-results";
pub const ANCHOR_ID: &str = "main-content";

const CARD_STYLE: &str =
    "border:1px solid #ccc;margin:10px;padding:10px;border-radius:8px;background:#f9f9f9;";
const IMAGE_STYLE: &str = "width:100px;height:auto;";

/// Maps a failed browser call into the crate error type.
pub(crate) fn dom_err(e: wasm_bindgen::JsValue) -> TravelError {
    TravelError::Dom(format!("{e:?}"))
}

pub fn document() -> Result<Document, TravelError> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| TravelError::Dom("no document available".into()))
}

/// `#id`, falling back to `selector` inside `scope`.
fn lookup(doc: &Document, id: &str, scope: &Element, selector: &str) -> Option<Element> {
    doc.get_element_by_id(id)
        .or_else(|| scope.query_selector(selector).ok().flatten())
}

/// The pre-existing form controls the widget attaches to.
#[derive(Debug, Clone)]
pub struct PageBindings {
    pub form: Element,
    pub input: HtmlInputElement,
    pub search_button: Element,
    pub clear_button: Element,
}

impl PageBindings {
    /// Finds the form and its controls. Returns `None` (after a console
    /// warning) when the page lacks them.
    pub fn discover(doc: &Document) -> Option<Self> {
        let form = doc
            .get_element_by_id("search-form")
            .or_else(|| doc.query_selector("#navbar form").ok().flatten());
        let Some(form) = form else {
            console::warn_1(
                &"Search form not found on page. Aborting search initialization.".into(),
            );
            return None;
        };

        let input = lookup(doc, "search-input", &form, "input[type=\"search\"]")
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok());
        let search_button = lookup(doc, "search-button", &form, "button[type=\"submit\"]");
        let clear_button = lookup(doc, "clear-button", &form, "button[type=\"button\"]");

        match (input, search_button, clear_button) {
            (Some(input), Some(search_button), Some(clear_button)) => Some(Self {
                form,
                input,
                search_button,
                clear_button,
            }),
            _ => {
                console::warn_1(
                    &"Search input or buttons not found. Aborting search initialization.".into(),
                );
                None
            }
        }
    }
}

/// Returns `#search-results`, creating it right after `#main-content` (or at
/// the end of `<body>` without an anchor) on first use.
pub fn ensure_results_container(doc: &Document) -> Result<Element, TravelError> {
    if let Some(existing) = doc.get_element_by_id(RESULTS_ID) {
        return Ok(existing);
    }

    let container = doc.create_element("div").map_err(dom_err)?;
    container.set_id(RESULTS_ID);

    match doc.get_element_by_id(ANCHOR_ID) {
        Some(anchor) => {
            let parent = anchor
                .parent_node()
                .ok_or_else(|| TravelError::Dom(format!("#{ANCHOR_ID} has no parent")))?;
            parent
                .insert_before(&container, anchor.next_sibling().as_ref())
                .map_err(dom_err)?;
        }
        None => {
            let body = doc
                .body()
                .ok_or_else(|| TravelError::Dom("no <body> element".into()))?;
            body.append_child(&container).map_err(dom_err)?;
        }
    }
    Ok(container)
}

/// Replaces the panel content with `view`.
pub fn render(doc: &Document, view: &ResultsView) -> Result<(), TravelError> {
    let container = ensure_results_container(doc)?;
    container.set_text_content(None);

    match view {
        ResultsView::Empty => container.set_text_content(Some(NO_RESULTS_MESSAGE)),
        ResultsView::Cards(cards) => {
            for card in cards {
                let node = build_card(doc, card)?;
                container.append_child(&node).map_err(dom_err)?;
            }
        }
    }
    Ok(())
}

/// Empties the panel if it exists. Never creates it.
pub fn clear_results(doc: &Document) {
    if let Some(container) = doc.get_element_by_id(RESULTS_ID) {
        container.set_text_content(None);
    }
}

fn text_element(doc: &Document, tag: &str, text: &str) -> Result<Element, TravelError> {
    let el = doc.create_element(tag).map_err(dom_err)?;
    el.set_text_content(Some(text));
    Ok(el)
}

fn build_card(doc: &Document, card: &CardView) -> Result<Element, TravelError> {
    let root = doc.create_element("div").map_err(dom_err)?;
    root.set_attribute("style", CARD_STYLE).map_err(dom_err)?;

    if let Some(url) = &card.image_url {
        let img: HtmlImageElement = doc
            .create_element("img")
            .map_err(dom_err)?
            .dyn_into()
            .map_err(|_| TravelError::Dom("<img> is not an HtmlImageElement".into()))?;
        img.set_src(url);
        img.set_alt(&card.name);
        img.set_attribute("style", IMAGE_STYLE).map_err(dom_err)?;
        root.append_child(&img).map_err(dom_err)?;
    }

    root.append_child(text_element(doc, "h3", &card.name)?.as_ref())
        .map_err(dom_err)?;
    root.append_child(text_element(doc, "p", &card.description)?.as_ref())
        .map_err(dom_err)?;

    if let Some(time) = &card.local_time {
        let line = doc.create_element("p").map_err(dom_err)?;
        line.append_child(text_element(doc, "strong", LOCAL_TIME_LABEL)?.as_ref())
            .map_err(dom_err)?;
        line.append_child(&doc.create_text_node(&format!(" {time}")))
            .map_err(dom_err)?;
        root.append_child(&line).map_err(dom_err)?;
    }

    Ok(root)
}
