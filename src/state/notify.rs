//! Dismissible notification banners with timed auto-removal.
//!
//! DESIGN
//! ======
//! `Notifier` decides *when* banners come and go; an [`AlertHost`] decides
//! *where* they are drawn. The browser host prepends Bootstrap alerts into the
//! page container, `MemoryAlertHost` keeps them in a list. A notifier without
//! a host swallows every call, mirroring a page that has no container.
//!
//! Each banner gets its own removal task. Dismissing early or clearing the
//! notifier cancels the task so nothing fires against a torn-down page.

#[cfg(test)]
#[path = "notify_test.rs"]
mod notify_test;

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::fmt;
use std::rc::{Rc, Weak};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::sched::{Scheduler, TaskHandle};

/// Bootstrap contextual color of a banner.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Primary,
    Secondary,
    Success,
    Danger,
    Warning,
    #[default]
    Info,
    Light,
    Dark,
}

impl Severity {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Success => "success",
            Self::Danger => "danger",
            Self::Warning => "warning",
            Self::Info => "info",
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a severity tag; unknown tags fall back to `Info`.
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "primary" => Self::Primary,
            "secondary" => Self::Secondary,
            "success" => Self::Success,
            "danger" | "error" => Self::Danger,
            "warning" => Self::Warning,
            "light" => Self::Light,
            "dark" => Self::Dark,
            _ => Self::Info,
        }
    }

    /// Full class list of a dismissible banner with this severity.
    #[must_use]
    pub fn alert_class(self) -> String {
        format!("alert alert-{} alert-dismissible fade show", self.as_str())
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(pub u64);

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub id: NotificationId,
    pub message: String,
    pub severity: Severity,
}

/// Rendering target for banners.
pub trait AlertHost {
    /// Show `notification` above every banner already present.
    fn prepend(&self, notification: &Notification);
    /// Remove the banner if it is still present.
    fn remove(&self, id: NotificationId);
}

/// Host that records banners in memory, newest first.
#[derive(Debug, Default)]
pub struct MemoryAlertHost {
    visible: RefCell<Vec<Notification>>,
}

impl MemoryAlertHost {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn visible(&self) -> Vec<Notification> {
        self.visible.borrow().clone()
    }

    #[must_use]
    pub fn count(&self, severity: Severity) -> usize {
        self.visible.borrow().iter().filter(|n| n.severity == severity).count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.visible.borrow().is_empty()
    }
}

impl AlertHost for MemoryAlertHost {
    fn prepend(&self, notification: &Notification) {
        self.visible.borrow_mut().insert(0, notification.clone());
    }

    fn remove(&self, id: NotificationId) {
        self.visible.borrow_mut().retain(|n| n.id != id);
    }
}

struct NotifierInner {
    host: Option<Rc<dyn AlertHost>>,
    scheduler: Rc<dyn Scheduler>,
    dismiss_after: Duration,
    next_id: Cell<u64>,
    timers: RefCell<HashMap<NotificationId, TaskHandle>>,
}

/// Cheap-to-clone handle for showing banners.
#[derive(Clone)]
pub struct Notifier {
    inner: Rc<NotifierInner>,
}

impl fmt::Debug for Notifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Notifier")
            .field("has_host", &self.inner.host.is_some())
            .field("dismiss_after", &self.inner.dismiss_after)
            .field("live", &self.live())
            .finish_non_exhaustive()
    }
}

impl Notifier {
    pub fn new(host: Option<Rc<dyn AlertHost>>, scheduler: Rc<dyn Scheduler>, dismiss_after: Duration) -> Self {
        Self {
            inner: Rc::new(NotifierInner {
                host,
                scheduler,
                dismiss_after,
                next_id: Cell::new(1),
                timers: RefCell::new(HashMap::new()),
            }),
        }
    }

    /// Show a banner and schedule its removal.
    ///
    /// Returns `None` when there is no host to draw into.
    pub fn show(&self, message: impl Into<String>, severity: Severity) -> Option<NotificationId> {
        let host = self.inner.host.as_ref()?;

        let id = NotificationId(self.inner.next_id.get());
        self.inner.next_id.set(id.0 + 1);
        host.prepend(&Notification { id, message: message.into(), severity });

        let weak: Weak<NotifierInner> = Rc::downgrade(&self.inner);
        let host = Rc::clone(host);
        let handle = self.inner.scheduler.schedule(
            self.inner.dismiss_after,
            Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    inner.timers.borrow_mut().remove(&id);
                }
                host.remove(id);
            }),
        );
        self.inner.timers.borrow_mut().insert(id, handle);
        Some(id)
    }

    pub fn info(&self, message: impl Into<String>) -> Option<NotificationId> {
        self.show(message, Severity::Info)
    }

    pub fn success(&self, message: impl Into<String>) -> Option<NotificationId> {
        self.show(message, Severity::Success)
    }

    pub fn danger(&self, message: impl Into<String>) -> Option<NotificationId> {
        self.show(message, Severity::Danger)
    }

    /// Remove a banner before its timer fires. Returns `false` if it was
    /// already gone.
    pub fn dismiss(&self, id: NotificationId) -> bool {
        let Some(handle) = self.inner.timers.borrow_mut().remove(&id) else {
            return false;
        };
        handle.cancel();
        if let Some(host) = self.inner.host.as_ref() {
            host.remove(id);
        }
        true
    }

    /// Cancel every pending removal and take every live banner down.
    pub fn clear(&self) {
        let drained: Vec<_> = self.inner.timers.borrow_mut().drain().collect();
        for (id, handle) in drained {
            handle.cancel();
            if let Some(host) = self.inner.host.as_ref() {
                host.remove(id);
            }
        }
    }

    /// Number of banners still waiting for removal.
    #[must_use]
    pub fn live(&self) -> usize {
        self.inner.timers.borrow().len()
    }

    #[must_use]
    pub fn has_host(&self) -> bool {
        self.inner.host.is_some()
    }
}
