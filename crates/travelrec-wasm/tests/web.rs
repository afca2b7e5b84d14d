use std::cell::RefCell;
use std::rc::Rc;

use serde_json::json;
use travelrec_core::{DestinationSet, SearchController, TravelError};
use travelrec_wasm::dom::{self, RESULTS_ID};
use travelrec_wasm::fetch::{document_for_console, load_destinations, load_into};
use travelrec_wasm::SearchWidget;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;
use web_sys::{Document, HtmlElement, HtmlInputElement};

wasm_bindgen_test_configure!(run_in_browser);

const DOC: &str = r#"{
  "countries": [
    {"name": "Japan", "cities": [
      {"name": "Tokyo, Japan", "imageUrl": "tokyo.jpg", "description": "Neon"},
      {"name": "Kyoto, Japan", "imageUrl": "kyoto.jpg", "description": "Shrines"}
    ]}
  ],
  "beaches": [{"title": "Maya Bay", "summary": "Cliffs"}]
}"#;

/// Replaces the test root's content, leaving the rest of `<body>` to the
/// test harness. A results panel left directly under `<body>` is removed.
fn mount_html(html: &str) -> Document {
    let doc = dom::document().unwrap();
    if let Some(stale) = doc.get_element_by_id(RESULTS_ID) {
        stale.remove();
    }
    let root = match doc.get_element_by_id("test-root") {
        Some(root) => root,
        None => {
            let root = doc.create_element("div").unwrap();
            root.set_id("test-root");
            doc.body().unwrap().append_child(&root).unwrap();
            root
        }
    };
    root.set_inner_html(html);
    doc
}

/// A fresh copy of the page skeleton.
fn page() -> Document {
    mount_html(
        r#"<nav id="navbar"><form id="search-form">
             <input id="search-input" type="search">
             <button id="search-button" type="submit">Search</button>
             <button id="clear-button" type="button">Clear</button>
           </form></nav>
           <div id="main-content"></div>
           <footer id="footer"></footer>"#,
    )
}

fn input(doc: &Document) -> HtmlInputElement {
    doc.get_element_by_id("search-input")
        .unwrap()
        .dyn_into()
        .unwrap()
}

fn click(doc: &Document, id: &str) {
    doc.get_element_by_id(id)
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap()
        .click();
}

fn results_text(doc: &Document) -> String {
    doc.get_element_by_id(RESULTS_ID)
        .and_then(|el| el.text_content())
        .unwrap_or_default()
}

fn card_count(doc: &Document) -> u32 {
    doc.get_element_by_id(RESULTS_ID)
        .map(|el| el.child_element_count())
        .unwrap_or(0)
}

fn ready(doc: Document) -> Rc<SearchWidget> {
    let set = DestinationSet::from_json_str(DOC).unwrap();
    let controller = Rc::new(RefCell::new(SearchController::ready(set)));
    SearchWidget::attach(doc, controller).expect("page has a search form")
}

#[wasm_bindgen_test]
fn country_search_renders_one_card_after_anchor() {
    let doc = page();
    let _widget = ready(doc.clone());

    input(&doc).set_value("  JAP ");
    click(&doc, "search-button");

    assert_eq!(card_count(&doc), 1);
    let container = doc.get_element_by_id(RESULTS_ID).unwrap();
    let anchor = doc.get_element_by_id("main-content").unwrap();
    assert_eq!(
        anchor.next_element_sibling().map(|e| e.id()),
        Some(RESULTS_ID.to_string())
    );
    let heading = container.query_selector("h3").unwrap().unwrap();
    assert_eq!(heading.text_content().as_deref(), Some("Japan"));
    // Japan has a known zone, so the card carries a time line.
    assert!(results_text(&doc).contains("Local time:"));
    assert!(container.query_selector("img").unwrap().is_none());
}

#[wasm_bindgen_test]
fn city_search_renders_images() {
    let doc = page();
    let _widget = ready(doc.clone());

    input(&doc).set_value("kyo");
    click(&doc, "search-button");

    assert_eq!(card_count(&doc), 2);
    let img = doc
        .query_selector(&format!("#{RESULTS_ID} img"))
        .unwrap()
        .unwrap();
    assert_eq!(img.get_attribute("alt").as_deref(), Some("Tokyo, Japan"));
}

#[wasm_bindgen_test]
fn beach_fallback_names_render() {
    let doc = page();
    let _widget = ready(doc.clone());

    input(&doc).set_value("beaches");
    click(&doc, "search-button");

    assert_eq!(card_count(&doc), 1);
    let text = results_text(&doc);
    assert!(text.contains("Maya Bay"));
    assert!(text.contains("Cliffs"));
    assert!(!text.contains("Local time:"));
}

#[wasm_bindgen_test]
fn no_match_shows_message_only() {
    let doc = page();
    let _widget = ready(doc.clone());

    input(&doc).set_value("atlantis");
    click(&doc, "search-button");

    assert_eq!(card_count(&doc), 0);
    assert_eq!(results_text(&doc), "No results found.");
}

#[wasm_bindgen_test]
fn each_search_replaces_the_previous_one() {
    let doc = page();
    let _widget = ready(doc.clone());

    input(&doc).set_value("kyo");
    click(&doc, "search-button");
    input(&doc).set_value("japan");
    click(&doc, "search-button");

    assert_eq!(card_count(&doc), 1);
    assert_eq!(doc.query_selector_all(&format!("#{RESULTS_ID}")).unwrap().length(), 1);
}

#[wasm_bindgen_test]
fn results_append_to_body_without_anchor() {
    let doc = mount_html(
        r#"<form id="search-form">
             <input id="search-input" type="search">
             <button id="search-button" type="submit">Search</button>
             <button id="clear-button" type="button">Clear</button>
           </form>"#,
    );
    let _widget = ready(doc.clone());

    input(&doc).set_value("japan");
    click(&doc, "search-button");

    let body = doc.body().unwrap();
    assert_eq!(
        body.last_element_child().map(|e| e.id()),
        Some(RESULTS_ID.to_string())
    );
    assert_eq!(card_count(&doc), 1);

    body.last_element_child().unwrap().remove();
}

#[wasm_bindgen_test]
fn clear_empties_input_and_results() {
    let doc = page();
    let widget = ready(doc.clone());

    input(&doc).set_value("japan");
    click(&doc, "search-button");
    click(&doc, "clear-button");

    assert_eq!(input(&doc).value(), "");
    assert_eq!(results_text(&doc), "");
    assert!(widget.controller().borrow().is_ready());
}

#[wasm_bindgen_test]
fn clear_before_any_search_is_harmless() {
    let doc = page();
    let _widget = ready(doc.clone());

    input(&doc).set_value("typed");
    click(&doc, "clear-button");

    assert_eq!(input(&doc).value(), "");
    assert!(doc.get_element_by_id(RESULTS_ID).is_none());
}

#[wasm_bindgen_test]
fn search_while_loading_renders_nothing() {
    let doc = page();
    let controller = Rc::new(RefCell::new(SearchController::new()));
    let _widget = SearchWidget::attach(doc.clone(), controller).unwrap();

    input(&doc).set_value("japan");
    click(&doc, "search-button");

    assert!(doc.get_element_by_id(RESULTS_ID).is_none());
}

#[wasm_bindgen_test]
fn missing_form_aborts_attach() {
    let doc = mount_html(r#"<div id="main-content"></div>"#);
    let controller = Rc::new(RefCell::new(SearchController::new()));
    assert!(SearchWidget::attach(doc, controller).is_none());
}

#[wasm_bindgen_test]
fn navbar_form_fallback_is_discovered() {
    let doc = mount_html(
        r#"<nav id="navbar"><form>
             <input type="search">
             <button type="submit">Search</button>
             <button type="button">Clear</button>
           </form></nav>
           <div id="main-content"></div>"#,
    );
    assert!(dom::PageBindings::discover(&doc).is_some());
}

#[wasm_bindgen_test]
fn exported_search_is_null_until_loaded() {
    // No page form in the test harness, so the module-level widget never
    // fetched anything.
    assert!(!travelrec_wasm::is_ready());
    assert!(travelrec_wasm::search("japan").is_null());
}

#[wasm_bindgen_test]
fn exported_local_time_uses_the_table() {
    assert!(travelrec_wasm::local_time("Tokyo, Japan").is_some());
    assert!(travelrec_wasm::local_time("Oslo, Norway").is_none());
}

// Not served by the test runner; fetching it answers 404.
const MISSING_RESOURCE: &str = "no-such-file.json";

#[wasm_bindgen_test]
async fn missing_document_is_a_network_error() {
    match load_destinations(MISSING_RESOURCE).await {
        Err(TravelError::Network { status, url }) => {
            assert_eq!(status, 404);
            assert_eq!(url, MISSING_RESOURCE);
        }
        other => panic!("expected a 404 network error, got {other:?}"),
    }
}

#[wasm_bindgen_test]
async fn failed_load_leaves_controller_loading() {
    let controller = RefCell::new(SearchController::new());

    assert!(!load_into(MISSING_RESOURCE, &controller).await);
    assert!(!controller.borrow().is_ready());
    assert_eq!(controller.borrow().search("japan"), None);
}

#[wasm_bindgen_test]
fn console_document_keeps_raw_entries() {
    let raw = json!({"beaches": [1, {"name": 7}]});
    let logged = document_for_console(&raw);

    let beaches = js_sys::Reflect::get(&logged, &JsValue::from_str("beaches")).unwrap();
    let beaches: js_sys::Array = beaches.dyn_into().unwrap();
    assert_eq!(beaches.length(), 2);
    assert_eq!(beaches.get(0).as_f64(), Some(1.0));

    // The model drops the bare number.
    assert_eq!(DestinationSet::from_value(raw).beaches.len(), 1);
}
