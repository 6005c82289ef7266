//! Currency and date formatting for table cells and receipts.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};

use crate::config::{DEFAULT_CURRENCY_SYMBOL, DEFAULT_DISPLAY_OFFSET_MINUTES};

/// `19 Oct 2026, 02:30 pm`
const DATE_DISPLAY_FORMAT: &str = "%-d %b %Y, %I:%M %P";

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    #[error("not a number: {0:?}")]
    InvalidAmount(String),
    #[error("not a date: {0:?}")]
    InvalidDate(String),
    #[error("utc offset out of range: {0} minutes")]
    InvalidOffset(i32),
}

/// Format `amount` with two decimals behind the default currency glyph.
#[must_use]
pub fn format_currency(amount: f64) -> String {
    format_currency_with(DEFAULT_CURRENCY_SYMBOL, amount)
}

#[must_use]
pub fn format_currency_with(symbol: &str, amount: f64) -> String {
    format!("{symbol}{amount:.2}")
}

/// Format an amount that arrived as text (form values, data attributes).
///
/// Like `parseFloat`, only the leading numeric part is read, so `"12.3 INR"`
/// is 12.3. Text with no leading number is rejected.
pub fn format_currency_str(raw: &str) -> Result<String, FormatError> {
    parse_amount(raw).map(format_currency)
}

/// Longest leading prefix of `raw` (after whitespace) that parses as a float.
pub fn parse_amount(raw: &str) -> Result<f64, FormatError> {
    let trimmed = raw.trim_start();
    let end = numeric_prefix_len(trimmed);
    trimmed[..end]
        .parse::<f64>()
        .map_err(|_| FormatError::InvalidAmount(raw.to_owned()))
}

fn numeric_prefix_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    let mut i = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        i += 1;
    }
    let int_start = i;
    while bytes.get(i).is_some_and(u8::is_ascii_digit) {
        i += 1;
    }
    let mut digits = i - int_start;
    if bytes.get(i) == Some(&b'.') {
        let frac_start = i + 1;
        let mut j = frac_start;
        while bytes.get(j).is_some_and(u8::is_ascii_digit) {
            j += 1;
        }
        if digits > 0 || j > frac_start {
            digits += j - frac_start;
            i = j;
        }
    }
    if digits == 0 {
        return 0;
    }
    if matches!(bytes.get(i), Some(b'e' | b'E')) {
        let mut j = i + 1;
        if matches!(bytes.get(j), Some(b'+' | b'-')) {
            j += 1;
        }
        let exp_start = j;
        while bytes.get(j).is_some_and(u8::is_ascii_digit) {
            j += 1;
        }
        if j > exp_start {
            i = j;
        }
    }
    i
}

/// Render a timestamp for display in the default offset (+05:30).
pub fn format_date(input: &str) -> Result<String, FormatError> {
    format_date_in(input, DEFAULT_DISPLAY_OFFSET_MINUTES)
}

/// Render a timestamp as `19 Oct 2026, 02:30 pm`.
///
/// Timestamps carrying an offset are shifted to `offset_minutes`; naive
/// timestamps and bare dates are shown as written.
pub fn format_date_in(input: &str, offset_minutes: i32) -> Result<String, FormatError> {
    let offset = FixedOffset::east_opt(offset_minutes * 60).ok_or(FormatError::InvalidOffset(offset_minutes))?;
    let local = parse_timestamp(input.trim(), offset).ok_or_else(|| FormatError::InvalidDate(input.to_owned()))?;
    Ok(local.format(DATE_DISPLAY_FORMAT).to_string())
}

fn parse_timestamp(input: &str, offset: FixedOffset) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.with_timezone(&offset).naive_local());
    }
    if let Some(dt) = NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(input, fmt).ok())
    {
        return Some(dt);
    }
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}
