//! Bookkeeping for the one-shot page bootstrap.
//!
//! The bootstrap sweeps the alerts present at load time onto dismissal timers
//! and arms a guard on every form's submit control. Both are kept here so the
//! browser layer only has to find elements and wire callbacks.

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

use std::cell::Cell;
use std::time::Duration;

use crate::sched::{Scheduler, TaskHandle};

/// Dismissal timers for the alerts found at bootstrap.
#[derive(Debug, Default)]
pub struct AlertSweep {
    handles: Vec<TaskHandle>,
}

impl AlertSweep {
    /// Schedule every dismisser to run once `delay` has elapsed.
    pub fn schedule<I, F>(scheduler: &dyn Scheduler, delay: Duration, dismissers: I) -> Self
    where
        I: IntoIterator<Item = F>,
        F: FnOnce() + 'static,
    {
        let handles = dismissers
            .into_iter()
            .map(|dismiss| scheduler.schedule(delay, Box::new(dismiss)))
            .collect();
        Self { handles }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    #[must_use]
    pub fn pending(&self) -> usize {
        self.handles.iter().filter(|h| h.is_pending()).count()
    }

    /// Cancel the timers that have not fired yet. Returns how many were cancelled.
    pub fn cancel_all(&self) -> usize {
        self.handles.iter().filter(|h| h.cancel()).count()
    }
}

/// Trips once per submit control; there is no re-arm.
#[derive(Debug, Default)]
pub struct SubmitGuard {
    tripped: Cell<bool>,
}

impl SubmitGuard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` only on the first call.
    pub fn trip(&self) -> bool {
        !self.tripped.replace(true)
    }

    #[must_use]
    pub fn is_tripped(&self) -> bool {
        self.tripped.get()
    }
}

/// Inner HTML of a submit button while its form is being processed.
#[must_use]
pub fn processing_markup(label: &str) -> String {
    format!(r#"<span class="spinner-border spinner-border-sm me-2"></span>{}"#, escape_html(label))
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}
