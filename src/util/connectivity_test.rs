use std::rc::Rc;
use std::time::Duration;

use super::*;
use crate::sched::ManualScheduler;
use crate::state::notify::{AlertHost, MemoryAlertHost};

#[test]
fn banners_match_connection_state() {
    assert_eq!(Connectivity::Online.banner(), ("Connection restored", Severity::Success));
    assert_eq!(Connectivity::Offline.banner(), ("No internet connection", Severity::Danger));
}

#[test]
fn event_names_round_trip() {
    for status in [Connectivity::Online, Connectivity::Offline] {
        assert_eq!(Connectivity::from_event(status.event_name()), Some(status));
    }
    assert_eq!(Connectivity::from_event("resize"), None);
}

#[test]
fn announce_shows_one_banner() {
    let host = Rc::new(MemoryAlertHost::new());
    let notifier = Notifier::new(
        Some(Rc::clone(&host) as Rc<dyn AlertHost>),
        Rc::new(ManualScheduler::new()),
        Duration::from_millis(4000),
    );

    announce(&notifier, Connectivity::Offline);
    assert_eq!(host.count(Severity::Danger), 1);
    announce(&notifier, Connectivity::Online);
    assert_eq!(host.visible()[0].message, "Connection restored");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn is_online_defaults_true_outside_browser() {
    assert!(is_online());
}
