//! Live-DOM glue (hydrate only).
//!
//! SYSTEM CONTEXT
//! ==============
//! These modules find elements, snapshot them into the `state` models, and
//! write results back. They hold no rules of their own beyond "which element".
//! `exports` publishes the helpers under the names the server templates call.

pub mod alerts;
pub mod exports;
pub mod listener;
pub mod page;
pub mod table;

use wasm_bindgen::{JsCast, JsValue};

use crate::state::table::TableError;

#[derive(Debug, thiserror::Error)]
pub enum DomError {
    #[error("no {0} on this page")]
    Missing(&'static str),
    #[error("browser call failed: {0}")]
    Js(String),
    #[error(transparent)]
    Table(#[from] TableError),
}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

pub(crate) fn document() -> Result<web_sys::Document, DomError> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or(DomError::Missing("document"))
}

/// Element nodes of a `NodeList`, in document order.
pub(crate) fn elements(list: &web_sys::NodeList) -> Vec<web_sys::Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
        .collect()
}

/// Every element under `root` matching `selector`; an invalid selector
/// matches nothing.
pub(crate) fn select_all(root: &web_sys::Element, selector: &str) -> Vec<web_sys::Element> {
    root.query_selector_all(selector)
        .map(|list| elements(&list))
        .unwrap_or_default()
}
