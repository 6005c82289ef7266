//! Table model behind sort, filter, and CSV export.
//!
//! DESIGN
//! ======
//! The browser layer snapshots a `<table>` into a [`TableModel`] (cell texts
//! plus each row's full text), asks the model for a new body order or for row
//! visibility, and applies the answer to the live rows. Rows keep their
//! section so export can walk header, body, and footer in document order.
//!
//! TRADE-OFFS
//! ==========
//! Sorting is ascending only and purely textual; "10" sorts before "9".
//! Cells missing from short rows compare as empty strings.

#[cfg(test)]
#[path = "table_test.rs"]
mod table_test;

use std::cmp::Ordering;
use std::string::FromUtf8Error;

use serde::{Deserialize, Serialize};

/// How exported cells are escaped.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CsvMode {
    /// RFC 4180: fields containing a comma, quote, or line break are quoted.
    #[default]
    Quoted,
    /// Cells joined with bare commas, no escaping at all.
    Plain,
}

#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("csv encoding failed: {0}")]
    Csv(#[from] csv::Error),
    #[error("csv buffer error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv output is not valid UTF-8: {0}")]
    Utf8(#[from] FromUtf8Error),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableRow {
    pub cells: Vec<String>,
    /// Full text of the row as the filter sees it.
    pub text: String,
    pub hidden: bool,
}

impl TableRow {
    /// Row whose full text is its cells joined by single spaces.
    pub fn new<I, S>(cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let cells: Vec<String> = cells.into_iter().map(Into::into).collect();
        let text = cells.join(" ");
        Self { cells, text, hidden: false }
    }

    /// Row with an explicit full text (the element's `textContent`).
    #[must_use]
    pub fn with_text(cells: Vec<String>, text: String) -> Self {
        Self { cells, text, hidden: false }
    }

    /// Text of `column`, or `""` when the row is too short.
    #[must_use]
    pub fn cell(&self, column: usize) -> &str {
        self.cells.get(column).map_or("", String::as_str)
    }

    #[must_use]
    pub fn matches(&self, query: &str) -> bool {
        matches_filter(&self.text, query)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FilterSummary {
    pub shown: usize,
    pub hidden: usize,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TableModel {
    pub head: Vec<TableRow>,
    pub body: Vec<TableRow>,
    pub foot: Vec<TableRow>,
}

impl TableModel {
    #[must_use]
    pub fn new(head: Vec<TableRow>, body: Vec<TableRow>) -> Self {
        Self { head, body, foot: Vec::new() }
    }

    /// Every row in document order: header, body, footer.
    pub fn rows(&self) -> impl Iterator<Item = &TableRow> {
        self.head.iter().chain(&self.body).chain(&self.foot)
    }

    /// Indices of body rows in ascending order of `column`. Stable.
    #[must_use]
    pub fn sort_order(&self, column: usize) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.body.len()).collect();
        order.sort_by(|&a, &b| locale_cmp(self.body[a].cell(column), self.body[b].cell(column)));
        order
    }

    /// Reorder body rows ascending by `column`.
    pub fn sort_by_column(&mut self, column: usize) {
        let order = self.sort_order(column);
        let mut slots: Vec<Option<TableRow>> = std::mem::take(&mut self.body).into_iter().map(Some).collect();
        self.body = order.into_iter().filter_map(|i| slots[i].take()).collect();
    }

    /// Hide every body row whose text does not contain `query`.
    pub fn filter(&mut self, query: &str) -> FilterSummary {
        let mut summary = FilterSummary::default();
        for row in &mut self.body {
            row.hidden = !row.matches(query);
            if row.hidden {
                summary.hidden += 1;
            } else {
                summary.shown += 1;
            }
        }
        summary
    }

    pub fn visible_body(&self) -> impl Iterator<Item = &TableRow> {
        self.body.iter().filter(|row| !row.hidden)
    }

    /// Serialize every row, one line per row, lines joined by `\n`.
    ///
    /// # Errors
    ///
    /// Only if the CSV writer fails, which an in-memory buffer should not.
    pub fn to_csv(&self, mode: CsvMode) -> Result<String, TableError> {
        let lines = self
            .rows()
            .map(|row| match mode {
                CsvMode::Plain => Ok(row.cells.join(",")),
                CsvMode::Quoted => quoted_line(&row.cells),
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(lines.join("\n"))
    }
}

fn quoted_line(cells: &[String]) -> Result<String, TableError> {
    if cells.is_empty() {
        return Ok(String::new());
    }
    let mut writer = csv::WriterBuilder::new()
        .flexible(true)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    writer.write_record(cells)?;
    let bytes = writer.into_inner().map_err(csv::IntoInnerError::into_error)?;
    let mut line = String::from_utf8(bytes)?;
    if line.ends_with('\n') {
        line.pop();
    }
    Ok(line)
}

/// Case-insensitive containment used by the live filter.
#[must_use]
pub fn matches_filter(text: &str, query: &str) -> bool {
    text.to_uppercase().contains(&query.to_uppercase())
}

/// Locale-aware string order.
///
/// The browser build defers to `String.prototype.localeCompare`. Elsewhere
/// letters compare case-insensitively first, lowercase sorts before uppercase
/// on ties, and raw code points break whatever remains.
#[must_use]
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    #[cfg(all(feature = "hydrate", target_arch = "wasm32"))]
    {
        js_sys::JsString::from(a)
            .locale_compare(b, &js_sys::Array::new(), &js_sys::Object::new())
            .cmp(&0)
    }
    #[cfg(not(all(feature = "hydrate", target_arch = "wasm32")))]
    {
        let folded = |s: &str| s.chars().flat_map(char::to_lowercase).collect::<Vec<_>>();
        folded(a)
            .cmp(&folded(b))
            .then_with(|| a.chars().map(char::is_uppercase).cmp(b.chars().map(char::is_uppercase)))
            .then_with(|| a.cmp(b))
    }
}
