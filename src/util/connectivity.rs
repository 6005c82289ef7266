//! Online/offline banners.
//!
//! The page binds the window `online`/`offline` events once at load and turns
//! each into a banner through [`announce`].

#[cfg(test)]
#[path = "connectivity_test.rs"]
mod connectivity_test;

use crate::state::notify::{NotificationId, Notifier, Severity};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Connectivity {
    Online,
    Offline,
}

impl Connectivity {
    /// Window event name that signals this state.
    #[must_use]
    pub fn event_name(self) -> &'static str {
        match self {
            Self::Online => "online",
            Self::Offline => "offline",
        }
    }

    #[must_use]
    pub fn from_event(name: &str) -> Option<Self> {
        match name {
            "online" => Some(Self::Online),
            "offline" => Some(Self::Offline),
            _ => None,
        }
    }

    #[must_use]
    pub fn banner(self) -> (&'static str, Severity) {
        match self {
            Self::Online => ("Connection restored", Severity::Success),
            Self::Offline => ("No internet connection", Severity::Danger),
        }
    }
}

pub fn announce(notifier: &Notifier, status: Connectivity) -> Option<NotificationId> {
    let (message, severity) = status.banner();
    log::info!("connectivity changed: {}", status.event_name());
    notifier.show(message, severity)
}

/// `navigator.onLine`; always `true` outside the browser.
pub fn is_online() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window().map_or(true, |w| w.navigator().on_line())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        true
    }
}
