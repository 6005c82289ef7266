use super::*;
use crate::sched::ManualScheduler;

fn setup() -> (Notifier, Rc<MemoryAlertHost>, ManualScheduler) {
    let host = Rc::new(MemoryAlertHost::new());
    let sched = ManualScheduler::new();
    let notifier = Notifier::new(
        Some(Rc::clone(&host) as Rc<dyn AlertHost>),
        Rc::new(sched.clone()),
        Duration::from_millis(4000),
    );
    (notifier, host, sched)
}

// =============================================================
// Severity
// =============================================================

#[test]
fn severity_default_is_info() {
    assert_eq!(Severity::default(), Severity::Info);
}

#[test]
fn severity_alert_class_is_dismissible_bootstrap_alert() {
    assert_eq!(Severity::Danger.alert_class(), "alert alert-danger alert-dismissible fade show");
}

#[test]
fn severity_from_tag_accepts_known_and_falls_back() {
    assert_eq!(Severity::from_tag("success"), Severity::Success);
    assert_eq!(Severity::from_tag(" DANGER "), Severity::Danger);
    assert_eq!(Severity::from_tag("error"), Severity::Danger);
    assert_eq!(Severity::from_tag("sparkly"), Severity::Info);
}

#[test]
fn severity_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Severity::Warning).unwrap(), "\"warning\"");
}

// =============================================================
// Notifier
// =============================================================

#[test]
fn show_prepends_newest_first() {
    let (notifier, host, _sched) = setup();
    notifier.info("first");
    notifier.success("second");

    let visible = host.visible();
    assert_eq!(visible.len(), 2);
    assert_eq!(visible[0].message, "second");
    assert_eq!(visible[0].severity, Severity::Success);
    assert_eq!(visible[1].message, "first");
}

#[test]
fn show_auto_removes_after_delay() {
    let (notifier, host, sched) = setup();
    notifier.info("saved");

    sched.advance(Duration::from_millis(3999));
    assert_eq!(host.visible().len(), 1);
    sched.advance(Duration::from_millis(1));
    assert!(host.is_empty());
    assert_eq!(notifier.live(), 0);
}

#[test]
fn staggered_banners_expire_independently() {
    let (notifier, host, sched) = setup();
    notifier.info("a");
    sched.advance(Duration::from_millis(1000));
    notifier.info("b");
    sched.advance(Duration::from_millis(3000));

    let visible = host.visible();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].message, "b");
}

#[test]
fn show_without_host_is_noop() {
    let sched = ManualScheduler::new();
    let notifier = Notifier::new(None, Rc::new(sched.clone()), Duration::from_millis(4000));
    assert!(notifier.show("lost", Severity::Danger).is_none());
    assert_eq!(sched.pending(), 0);
    assert!(!notifier.has_host());
}

#[test]
fn dismiss_removes_early_and_cancels_timer() {
    let (notifier, host, sched) = setup();
    let id = notifier.danger("oops").unwrap();

    assert!(notifier.dismiss(id));
    assert!(host.is_empty());
    assert_eq!(sched.pending(), 0);
    assert!(!notifier.dismiss(id));
}

#[test]
fn clear_cancels_everything() {
    let (notifier, host, sched) = setup();
    notifier.info("a");
    notifier.info("b");
    notifier.clear();

    assert!(host.is_empty());
    assert_eq!(sched.pending(), 0);
    assert_eq!(sched.advance(Duration::from_secs(10)), 0);
}

#[test]
fn ids_are_unique_per_notifier() {
    let (notifier, _host, _sched) = setup();
    let a = notifier.info("a").unwrap();
    let b = notifier.info("b").unwrap();
    assert_ne!(a, b);
    assert_eq!(a.to_string(), "n1");
}

#[test]
fn banner_is_removed_even_after_notifier_is_dropped() {
    let (notifier, host, sched) = setup();
    notifier.info("orphan");
    drop(notifier);
    sched.advance(Duration::from_secs(5));
    assert!(host.is_empty());
}
