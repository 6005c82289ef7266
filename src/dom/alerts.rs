//! Bootstrap alert banners in the page container.

use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use crate::state::notify::{AlertHost, Notification, NotificationId};

const NOTIFICATION_ID_ATTR: &str = "data-notification-id";

/// Prepends alerts into the first element matching the container selector.
pub struct DomAlertHost {
    container: Element,
}

impl DomAlertHost {
    #[must_use]
    pub fn new(container: Element) -> Self {
        Self { container }
    }

    /// Host for `selector`, or `None` when the page has no such container.
    #[must_use]
    pub fn find(document: &Document, selector: &str) -> Option<Self> {
        document.query_selector(selector).ok().flatten().map(Self::new)
    }

    fn build(&self, notification: &Notification) -> Result<Element, JsValue> {
        let doc = self
            .container
            .owner_document()
            .ok_or_else(|| JsValue::from_str("container is detached"))?;

        let alert = doc.create_element("div")?;
        alert.set_class_name(&notification.severity.alert_class());
        alert.set_attribute("role", "alert")?;
        alert.set_attribute(NOTIFICATION_ID_ATTR, &notification.id.to_string())?;
        alert.append_child(&doc.create_text_node(&notification.message))?;

        let close = doc.create_element("button")?;
        close.set_attribute("type", "button")?;
        close.set_class_name("btn-close");
        close.set_attribute("data-bs-dismiss", "alert")?;
        close.set_attribute("aria-label", "Close")?;
        alert.append_child(&close)?;

        Ok(alert)
    }
}

impl AlertHost for DomAlertHost {
    fn prepend(&self, notification: &Notification) {
        match self.build(notification) {
            Ok(alert) => {
                let first = self.container.first_child();
                if let Err(e) = self.container.insert_before(&alert, first.as_ref()) {
                    log::warn!("could not insert alert: {e:?}");
                }
            }
            Err(e) => log::warn!("could not build alert: {e:?}"),
        }
    }

    fn remove(&self, id: NotificationId) {
        let selector = format!("[{NOTIFICATION_ID_ATTR}=\"{id}\"]");
        if let Ok(Some(alert)) = self.container.query_selector(&selector) {
            alert.remove();
        }
    }
}
