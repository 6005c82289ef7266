//! Helpers published to page scripts under their long-standing JS names.
//!
//! Templates call `formatCurrency(...)`, `apiCall(...)` and friends inline,
//! so these keep loose JS signatures and report failure the way the pages
//! expect: `null`, `false`, or a logged error.

use std::rc::Rc;

use serde_json::Value;
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::wasm_bindgen;

use super::page::{Page, with_page};
use super::table::{bind_filter_by_id, export_csv, first_table, sort_table};
use super::{DomError, document};
use crate::config::UiConfig;
use crate::net::api::{ApiClient, GlooTransport, Method};
use crate::sched::TimeoutScheduler;
use crate::state::notify::{Notifier, Severity};
use crate::util::storage::{JsonStore, LocalStorage, StorageError};
use crate::util::{browser, connectivity, format, ident, query, validate};

fn config() -> UiConfig {
    with_page(|page| page.config().clone()).unwrap_or_default()
}

fn notifier() -> Notifier {
    with_page(|page| page.notifier().clone()).unwrap_or_else(|| {
        let config = UiConfig::default();
        Notifier::new(None, Rc::new(TimeoutScheduler), config.dismiss_after())
    })
}

fn to_json(value: &JsValue) -> Option<Value> {
    if value.is_undefined() || value.is_null() {
        return None;
    }
    let raw: String = js_sys::JSON::stringify(value).ok()?.into();
    serde_json::from_str(&raw).ok()
}

fn from_json(value: &Value) -> JsValue {
    serde_json::to_string(value)
        .ok()
        .and_then(|raw| js_sys::JSON::parse(&raw).ok())
        .unwrap_or(JsValue::NULL)
}

fn local_store() -> Result<JsonStore<LocalStorage>, StorageError> {
    LocalStorage::open().map(JsonStore::new)
}

fn report(op: &str, err: &DomError) {
    log::error!("{op}: {err}");
}

// =============================================================================
// Formatting and validation
// =============================================================================

/// Accepts a number or a numeric string; anything else renders as `NaN`.
#[wasm_bindgen(js_name = formatCurrency)]
pub fn format_currency_js(amount: JsValue) -> String {
    let symbol = config().currency_symbol;
    let parsed = amount
        .as_f64()
        .or_else(|| amount.as_string().and_then(|raw| format::parse_amount(&raw).ok()));
    match parsed {
        Some(value) => format::format_currency_with(&symbol, value),
        None => format!("{symbol}NaN"),
    }
}

#[wasm_bindgen(js_name = formatDate)]
pub fn format_date_js(input: String) -> String {
    format::format_date_in(&input, config().display_offset_minutes).unwrap_or_else(|e| {
        log::warn!("{e}");
        "Invalid Date".to_owned()
    })
}

#[wasm_bindgen(js_name = isValidEmail)]
pub fn is_valid_email_js(email: String) -> bool {
    validate::is_valid_email(&email)
}

#[wasm_bindgen(js_name = isValidPhone)]
pub fn is_valid_phone_js(phone: String) -> bool {
    validate::is_valid_phone(&phone)
}

#[wasm_bindgen(js_name = generateId)]
pub fn generate_id_js() -> String {
    ident::generate_id_with(&config().id_prefix)
}

#[wasm_bindgen(js_name = getUrlParam)]
pub fn get_url_param_js(param: String) -> Option<String> {
    query::current_query_param(&param)
}

// =============================================================================
// Notifications and remote calls
// =============================================================================

#[wasm_bindgen(js_name = showNotification)]
pub fn show_notification_js(message: String, kind: Option<String>) {
    let severity = kind.as_deref().map_or(Severity::Info, Severity::from_tag);
    notifier().show(message, severity);
}

/// Resolves to the parsed JSON reply, or `null` after showing an error banner.
#[wasm_bindgen(js_name = apiCall)]
pub async fn api_call_js(url: String, method: Option<String>, data: JsValue) -> JsValue {
    let method = method.as_deref().map_or(Method::Get, |name| {
        Method::from_name(name).unwrap_or_else(|| {
            log::warn!("unknown method {name:?}; using GET");
            Method::Get
        })
    });
    let payload = to_json(&data);
    let api = with_page(Page::api).unwrap_or_else(|| ApiClient::new(GlooTransport, notifier()));
    api.call(&url, method, payload.as_ref())
        .await
        .map_or(JsValue::NULL, |reply| from_json(&reply))
}

// =============================================================================
// Tables
// =============================================================================

/// Sort the first table on the page by `column`.
#[wasm_bindgen(js_name = sortTable)]
pub fn sort_table_js(column: usize) {
    let result = document()
        .and_then(|doc| first_table(&doc))
        .and_then(|table| sort_table(&table, column));
    if let Err(e) = result {
        report("sortTable", &e);
    }
}

#[wasm_bindgen(js_name = filterTable)]
pub fn filter_table_js(input_id: String, table_id: String) {
    match bind_filter_by_id(&input_id, &table_id) {
        Ok(listener) => {
            if with_page(|page| page.retain(listener)).is_none() {
                log::warn!("filterTable called before page boot; binding not kept");
            }
        }
        Err(e) => report("filterTable", &e),
    }
}

#[wasm_bindgen(js_name = exportTableToCSV)]
pub fn export_table_to_csv_js(filename: Option<String>) {
    let config = config();
    let filename = filename.filter(|name| !name.is_empty()).unwrap_or(config.csv_filename);
    if let Err(e) = export_csv(&filename, config.csv_mode) {
        report("exportTableToCSV", &e);
    }
}

// =============================================================================
// Storage
// =============================================================================

/// Returns `false` when the value could not be stored.
#[wasm_bindgen(js_name = saveToLocalStorage)]
pub fn save_to_local_storage_js(key: String, value: JsValue) -> bool {
    let value = to_json(&value).unwrap_or(Value::Null);
    local_store()
        .and_then(|store| store.save(&key, &value))
        .inspect_err(|e| log::error!("Error saving to localStorage: {e}"))
        .is_ok()
}

/// Stored value, or `null` when missing or unreadable.
#[wasm_bindgen(js_name = getFromLocalStorage)]
pub fn get_from_local_storage_js(key: String) -> JsValue {
    match local_store().and_then(|store| store.load::<Value>(&key)) {
        Ok(Some(value)) => from_json(&value),
        Ok(None) => JsValue::NULL,
        Err(e) => {
            log::error!("Error reading from localStorage: {e}");
            JsValue::NULL
        }
    }
}

#[wasm_bindgen(js_name = removeFromLocalStorage)]
pub fn remove_from_local_storage_js(key: String) -> bool {
    local_store()
        .and_then(|store| store.remove(&key))
        .inspect_err(|e| log::error!("Error removing from localStorage: {e}"))
        .is_ok()
}

// =============================================================================
// Browser
// =============================================================================

/// Resolves to `true` once the text is on the clipboard.
#[wasm_bindgen(js_name = copyToClipboard)]
pub async fn copy_to_clipboard_js(text: String) -> bool {
    browser::copy_to_clipboard(&text, &notifier()).await.is_ok()
}

#[wasm_bindgen(js_name = printPage)]
pub fn print_page_js() {
    browser::print_page();
}

#[wasm_bindgen(js_name = confirmAction)]
pub fn confirm_action_js(message: Option<String>) -> bool {
    browser::confirm_action(message.as_deref())
}

#[wasm_bindgen(js_name = isOnline)]
pub fn is_online_js() -> bool {
    connectivity::is_online()
}
