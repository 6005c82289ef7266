use super::*;

#[test]
fn confirm_message_falls_back_to_default() {
    assert_eq!(confirm_message(None), "Are you sure?");
    assert_eq!(confirm_message(Some("")), "Are you sure?");
    assert_eq!(confirm_message(Some("Cancel booking #42?")), "Cancel booking #42?");
}

#[cfg(not(feature = "hydrate"))]
mod headless {
    use std::rc::Rc;
    use std::time::Duration;

    use super::*;
    use crate::sched::ManualScheduler;
    use crate::state::notify::{AlertHost, MemoryAlertHost};

    #[test]
    fn copy_outside_browser_is_unavailable_and_silent() {
        let host = Rc::new(MemoryAlertHost::new());
        let notifier = Notifier::new(
            Some(Rc::clone(&host) as Rc<dyn AlertHost>),
            Rc::new(ManualScheduler::new()),
            Duration::from_millis(4000),
        );
        let result = futures::executor::block_on(copy_to_clipboard("ID-ABC", &notifier));
        assert_eq!(result, Err(ClipboardError::Unavailable));
        assert!(host.is_empty());
    }

    #[test]
    fn confirm_outside_browser_declines() {
        assert!(!confirm_action(Some("Delete?")));
    }

    #[test]
    fn print_outside_browser_is_noop() {
        print_page();
    }
}
