//! Page bootstrap: the behavior every admin page gets on load.
//!
//! DESIGN
//! ======
//! One [`Page`] per document, kept in a thread-local so the exported JS
//! helpers can reach its notifier and config. Boot sweeps the server-rendered
//! alerts onto dismissal timers, guards every form's submit control, and
//! wires connectivity banners. [`teardown`] undoes all of it.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, HtmlButtonElement};

use super::alerts::DomAlertHost;
use super::listener::EventListener;
use super::{elements, select_all};
use crate::config::UiConfig;
use crate::net::api::{ApiClient, GlooTransport};
use crate::sched::{Scheduler, TimeoutScheduler};
use crate::state::notify::{AlertHost, Notifier};
use crate::state::page::{AlertSweep, SubmitGuard, processing_markup};
use crate::util::connectivity::{Connectivity, announce};

pub const LOADED_MESSAGE: &str = "Cab Management System loaded successfully!";

thread_local! {
    static PAGE: RefCell<Option<Page>> = const { RefCell::new(None) };
}

pub struct Page {
    config: UiConfig,
    notifier: Notifier,
    alerts: AlertSweep,
    listeners: Vec<EventListener>,
    extra: RefCell<Vec<EventListener>>,
}

impl Page {
    /// Attach page behavior to `document`.
    #[must_use]
    pub fn boot(document: &Document, config: UiConfig) -> Self {
        let scheduler: Rc<dyn Scheduler> = Rc::new(TimeoutScheduler);
        let host = DomAlertHost::find(document, &config.container_selector)
            .map(|host| Rc::new(host) as Rc<dyn AlertHost>);
        if host.is_none() {
            log::warn!("no alert container matches {:?}", config.container_selector);
        }
        let notifier = Notifier::new(host, Rc::clone(&scheduler), config.dismiss_after());

        let alerts = sweep_alerts(document, &config, scheduler.as_ref());
        let mut listeners = guard_forms(document, &config);
        listeners.extend(watch_connectivity(&notifier));

        log::debug!("{} alerts scheduled, {} listeners", alerts.len(), listeners.len());
        log::info!("{LOADED_MESSAGE}");
        Self { config, notifier, alerts, listeners, extra: RefCell::new(Vec::new()) }
    }

    #[must_use]
    pub fn config(&self) -> &UiConfig {
        &self.config
    }

    #[must_use]
    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    #[must_use]
    pub fn api(&self) -> ApiClient<GlooTransport> {
        ApiClient::new(GlooTransport, self.notifier.clone())
    }

    /// Keep a listener alive for the life of the page.
    pub fn retain(&self, listener: EventListener) {
        self.extra.borrow_mut().push(listener);
    }

    /// Cancel pending timers, remove live banners, detach every listener.
    pub fn teardown(self) {
        let cancelled = self.alerts.cancel_all();
        self.notifier.clear();
        log::debug!("teardown: {cancelled} alert timers cancelled");
        drop(self.listeners);
        drop(self.extra);
    }
}

fn sweep_alerts(document: &Document, config: &UiConfig, scheduler: &dyn Scheduler) -> AlertSweep {
    let found = document
        .query_selector_all(&config.alert_selector)
        .map(|list| elements(&list))
        .unwrap_or_default();
    AlertSweep::schedule(scheduler, config.dismiss_after(), found.into_iter().map(|alert| move || alert.remove()))
}

fn guard_forms(document: &Document, config: &UiConfig) -> Vec<EventListener> {
    let markup = processing_markup(&config.processing_label);
    let forms = document
        .query_selector_all("form")
        .map(|list| elements(&list))
        .unwrap_or_default();
    forms
        .into_iter()
        .filter_map(|form| {
            let guard = SubmitGuard::new();
            let markup = markup.clone();
            let target = form.clone();
            EventListener::new(form.as_ref(), "submit", move |_| {
                let Some(button) = submit_control(&target) else { return };
                if guard.trip() {
                    button.set_disabled(true);
                    button.set_inner_html(&markup);
                }
            })
        })
        .collect()
}

fn submit_control(form: &Element) -> Option<HtmlButtonElement> {
    select_all(form, r#"button[type="submit"]"#)
        .into_iter()
        .find_map(|el| el.dyn_into::<HtmlButtonElement>().ok())
}

fn watch_connectivity(notifier: &Notifier) -> Vec<EventListener> {
    let Some(window) = web_sys::window() else { return Vec::new() };
    [Connectivity::Online, Connectivity::Offline]
        .into_iter()
        .filter_map(|status| {
            let notifier = notifier.clone();
            EventListener::new(window.as_ref(), status.event_name(), move |_| {
                announce(&notifier, status);
            })
        })
        .collect()
}

fn install(config: UiConfig) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::warn!("no document; page behavior not installed");
        return;
    };
    let page = Page::boot(&document, config);
    let previous = PAGE.with(|slot| slot.borrow_mut().replace(page));
    if let Some(previous) = previous {
        previous.teardown();
    }
}

/// Boot now if the DOM is parsed, otherwise on `DOMContentLoaded`.
pub fn boot_when_ready(config: UiConfig) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else { return };
    if document.ready_state() != "loading" {
        install(config);
        return;
    }
    let ready = Closure::once_into_js(move || install(config));
    if let Err(e) = document.add_event_listener_with_callback("DOMContentLoaded", ready.unchecked_ref()) {
        log::error!("could not wait for DOMContentLoaded: {e:?}");
    }
}

/// Run `f` against the booted page, if there is one.
pub fn with_page<R>(f: impl FnOnce(&Page) -> R) -> Option<R> {
    PAGE.with(|slot| slot.borrow().as_ref().map(f))
}

/// Remove the booted page's behavior.
pub fn teardown() {
    if let Some(page) = PAGE.with(|slot| slot.borrow_mut().take()) {
        page.teardown();
    }
}
