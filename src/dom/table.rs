//! Table sort, quick filter, and CSV download against live `<table>` elements.
//!
//! Rows are snapshotted into a [`TableModel`]; ordering, matching, and CSV
//! rendering all happen there. This module only moves `<tr>` nodes and
//! toggles their `display`.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, Document, Element, HtmlAnchorElement, HtmlElement, HtmlInputElement, Url};

use super::listener::EventListener;
use super::{DomError, document, select_all};
use crate::state::table::{CsvMode, FilterSummary, TableModel, TableRow, matches_filter};

const CSV_MIME: &str = "text/csv";

/// First `<table>` on the page.
pub fn first_table(document: &Document) -> Result<Element, DomError> {
    document
        .query_selector("table")
        .ok()
        .flatten()
        .ok_or(DomError::Missing("table"))
}

fn snapshot_row(tr: &Element) -> TableRow {
    let cells = select_all(tr, "td, th")
        .iter()
        .map(|cell| cell.text_content().unwrap_or_default())
        .collect();
    TableRow::with_text(cells, tr.text_content().unwrap_or_default())
}

fn body_rows(table: &Element) -> Vec<Element> {
    select_all(table, "tbody tr")
}

/// Snapshot every row, sectioned by its parent (`thead`, `tbody`, `tfoot`).
#[must_use]
pub fn read_model(table: &Element) -> TableModel {
    let mut model = TableModel::default();
    for tr in select_all(table, "tr") {
        let section = tr.parent_element().map(|p| p.tag_name()).unwrap_or_default();
        let row = snapshot_row(&tr);
        match section.to_ascii_uppercase().as_str() {
            "THEAD" => model.head.push(row),
            "TFOOT" => model.foot.push(row),
            _ => model.body.push(row),
        }
    }
    model
}

/// Reorder the body rows ascending by `column`.
///
/// # Errors
///
/// Fails when the table has no `<tbody>` or a row cannot be moved.
pub fn sort_table(table: &Element, column: usize) -> Result<(), DomError> {
    let tbody = table
        .query_selector("tbody")
        .ok()
        .flatten()
        .ok_or(DomError::Missing("tbody"))?;
    let rows = body_rows(table);
    let model = TableModel::new(Vec::new(), rows.iter().map(snapshot_row).collect());
    for index in model.sort_order(column) {
        tbody.append_child(&rows[index])?;
    }
    Ok(())
}

/// Show body rows whose text contains `query`, hide the rest.
pub fn apply_filter(table: &Element, query: &str) -> FilterSummary {
    let mut summary = FilterSummary::default();
    for tr in body_rows(table) {
        let show = matches_filter(&tr.text_content().unwrap_or_default(), query);
        if let Some(row) = tr.dyn_ref::<HtmlElement>() {
            let _ = row.style().set_property("display", if show { "" } else { "none" });
        }
        if show {
            summary.shown += 1;
        } else {
            summary.hidden += 1;
        }
    }
    summary
}

/// Re-filter `table` on every keyup in `input`.
#[must_use]
pub fn bind_filter(input: &HtmlInputElement, table: &Element) -> Option<EventListener> {
    let source = input.clone();
    let table = table.clone();
    EventListener::new(input.as_ref(), "keyup", move |_| {
        let summary = apply_filter(&table, &source.value());
        log::debug!("filter: {} shown, {} hidden", summary.shown, summary.hidden);
    })
}

/// [`bind_filter`] by element ids.
///
/// # Errors
///
/// Fails when either id is missing or the input is not an `<input>`.
pub fn bind_filter_by_id(input_id: &str, table_id: &str) -> Result<EventListener, DomError> {
    let doc = document()?;
    let input = doc
        .get_element_by_id(input_id)
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
        .ok_or(DomError::Missing("filter input"))?;
    let table = doc.get_element_by_id(table_id).ok_or(DomError::Missing("table"))?;
    bind_filter(&input, &table).ok_or_else(|| DomError::Js("keyup listener refused".into()))
}

/// Render the first table on the page and download it as `filename`.
///
/// # Errors
///
/// Fails when there is no table, CSV rendering fails, or the download
/// cannot be started.
pub fn export_csv(filename: &str, mode: CsvMode) -> Result<(), DomError> {
    let doc = document()?;
    let csv = read_model(&first_table(&doc)?).to_csv(mode)?;
    download_text(&doc, &csv, filename, CSV_MIME)?;
    log::info!("exported {filename}");
    Ok(())
}

/// Save `contents` through a temporary anchor and object URL.
///
/// # Errors
///
/// Any failed browser call.
pub fn download_text(doc: &Document, contents: &str, filename: &str, mime: &str) -> Result<(), DomError> {
    let parts = js_sys::Array::of1(&JsValue::from_str(contents));
    let options = BlobPropertyBag::new();
    options.set_type(mime);
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options)?;
    let url = Url::create_object_url_with_blob(&blob)?;

    let anchor: HtmlAnchorElement = doc
        .create_element("a")?
        .dyn_into()
        .map_err(|_| DomError::Js("anchor is not an HtmlAnchorElement".into()))?;
    anchor.set_href(&url);
    anchor.set_download(filename);

    let body = doc.body().ok_or(DomError::Missing("body"))?;
    body.append_child(&anchor)?;
    anchor.click();
    body.remove_child(&anchor)?;
    Url::revoke_object_url(&url)?;
    Ok(())
}
