// crates/travelrec-wasm/src/fetch.rs
use std::cell::RefCell;
use std::rc::Rc;

use serde::Serialize;
use serde_json::Value;
use travelrec_core::{DestinationSet, SearchController, TravelError};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{console, Response};

use crate::dom::dom_err;

/// Fetches the recommendation document once and parses it as plain JSON.
pub async fn fetch_document(url: &str) -> Result<Value, TravelError> {
    let window = web_sys::window().ok_or_else(|| TravelError::Dom("no window".into()))?;

    let response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| TravelError::Http(format!("{e:?}")))?;
    let response: Response = response.dyn_into().map_err(dom_err)?;

    if !response.ok() {
        return Err(TravelError::Network {
            status: response.status(),
            url: url.to_string(),
        });
    }

    let body = JsFuture::from(response.text().map_err(dom_err)?)
        .await
        .map_err(|e| TravelError::Http(format!("{e:?}")))?;
    let text = body
        .as_string()
        .ok_or_else(|| TravelError::Dom("response body is not text".into()))?;

    Ok(serde_json::from_str(&text)?)
}

/// [`fetch_document`] followed by the permissive model decoding.
pub async fn load_destinations(url: &str) -> Result<DestinationSet, TravelError> {
    fetch_document(url).await.map(DestinationSet::from_value)
}

/// The document as the console should show it: plain objects and arrays,
/// exactly as served.
pub fn document_for_console(value: &Value) -> JsValue {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .unwrap_or_default()
}

/// Runs the single load and moves `controller` to ready on success. On
/// failure the error is logged and the controller stays loading.
pub async fn load_into(url: &str, controller: &RefCell<SearchController>) -> bool {
    match fetch_document(url).await {
        Ok(document) => {
            console::log_2(
                &"Recommendation Results:".into(),
                &document_for_console(&document),
            );
            controller
                .borrow_mut()
                .complete(DestinationSet::from_value(document))
        }
        Err(e) => {
            console::error_2(
                &"Error fetching recommendation results:".into(),
                &e.to_string().into(),
            );
            false
        }
    }
}

/// Starts [`load_into`] in the background.
pub fn spawn_load(url: &'static str, controller: Rc<RefCell<SearchController>>) {
    spawn_local(async move {
        load_into(url, &controller).await;
    });
}
