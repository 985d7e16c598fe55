//! Dialog flow integration tests
//!
//! Drives the public API end to end: producers build items from content
//! against a mock host, submit them to one scheduler, and user actions
//! (button clicks, direct dismissals) advance the slot.

use std::cell::RefCell;
use std::rc::Rc;

use modalq::{
    DialogContent, ItemState, MockHost, ModalItem, ModalqError, Presentable, Priority, SlotScheduler,
    SurfaceEvent,
};

fn dialog(host: &MockHost, id: &str, priority: Priority) -> Rc<RefCell<ModalItem>> {
    ModalItem::create(
        host,
        DialogContent::new(format!("{id} message")).with_id(id).with_priority(priority),
    )
    .unwrap()
}

/// Integration test: a headless host fails item construction fast
#[test]
fn test_headless_host_rejected_at_construction() {
    let host = MockHost::headless();
    let err = ModalItem::create(&host, DialogContent::new("hello")).unwrap_err();
    assert!(matches!(err, ModalqError::NonModalHost(_)));
}

/// Integration test: FIFO tiebreak, then dismissal chains to the next item
#[test]
fn test_fifo_then_chain_on_dismiss() {
    let host = MockHost::interactive();
    let scheduler = SlotScheduler::new();

    let a = dialog(&host, "a", Priority::Normal);
    let b = dialog(&host, "b", Priority::Normal);
    scheduler.submit(a.clone());
    scheduler.submit(b.clone());

    assert_eq!(scheduler.current_id().as_deref(), Some("a"));

    a.borrow_mut().dismiss();
    assert_eq!(scheduler.current_id().as_deref(), Some("b"));

    b.borrow_mut().dismiss();
    assert!(scheduler.is_idle());
}

/// Integration test: a SYSTEM arrival preempts a LOW occupant, which
/// returns to the slot afterwards
#[test]
fn test_preemption_and_return() {
    let host = MockHost::interactive();
    let scheduler = SlotScheduler::new();

    let a = dialog(&host, "a", Priority::Low);
    let sys = dialog(&host, "sys", Priority::System);

    scheduler.submit(a.clone());
    assert_eq!(scheduler.current_id().as_deref(), Some("a"));

    scheduler.submit(sys.clone());
    assert_eq!(scheduler.current_id().as_deref(), Some("sys"));
    assert_eq!(scheduler.state_of("a"), ItemState::Queued);

    sys.borrow_mut().dismiss();
    assert_eq!(scheduler.current_id().as_deref(), Some("a"));

    // The surface saw: a up, a down (preemption), sys up, sys down, a up.
    assert_eq!(
        host.surface().events(),
        vec![
            SurfaceEvent::Presented("a".to_string()),
            SurfaceEvent::Withdrawn("a".to_string()),
            SurfaceEvent::Presented("sys".to_string()),
            SurfaceEvent::Withdrawn("sys".to_string()),
            SurfaceEvent::Presented("a".to_string()),
        ]
    );
}

/// Integration test: equal or lower priority never displaces the occupant
#[test]
fn test_no_displacement_on_tie_or_lower() {
    let host = MockHost::interactive();
    let scheduler = SlotScheduler::new();

    scheduler.submit(dialog(&host, "a", Priority::Normal));
    scheduler.submit(dialog(&host, "tie", Priority::Normal));
    scheduler.submit(dialog(&host, "lower", Priority::Low));

    assert_eq!(scheduler.current_id().as_deref(), Some("a"));
    assert_eq!(host.surface().withdrawn_count("a"), 0);
    assert_eq!(scheduler.pending(), 2);
}

/// Integration test: queued order is strict priority bands with FIFO inside
#[test]
fn test_stable_ordering_across_bands() {
    let host = MockHost::interactive();
    let scheduler = SlotScheduler::new();

    // Occupy the slot so the next three stay queued.
    let blocker = dialog(&host, "blocker", Priority::System);
    scheduler.submit(blocker.clone());

    let n1 = dialog(&host, "n1", Priority::Normal);
    let n2 = dialog(&host, "n2", Priority::Normal);
    let high = dialog(&host, "high", Priority::High);
    scheduler.submit(n1.clone());
    scheduler.submit(n2.clone());
    scheduler.submit(high.clone());

    blocker.borrow_mut().dismiss();
    assert_eq!(scheduler.current_id().as_deref(), Some("high"));
    high.borrow_mut().dismiss();
    assert_eq!(scheduler.current_id().as_deref(), Some("n1"));
    n1.borrow_mut().dismiss();
    assert_eq!(scheduler.current_id().as_deref(), Some("n2"));
}

/// Integration test: resubmitting a queued id changes nothing
#[test]
fn test_idempotent_submission() {
    let host = MockHost::interactive();
    let scheduler = SlotScheduler::new();

    scheduler.submit(dialog(&host, "blocker", Priority::System));
    scheduler.submit(dialog(&host, "b", Priority::Normal));
    scheduler.submit(dialog(&host, "b", Priority::Normal));

    assert_eq!(scheduler.pending(), 1);
    assert_eq!(host.surface().presented_count("b"), 0);
}

/// Integration test: a button click is a user-initiated dismissal and
/// advances the queue
#[test]
fn test_click_advances_queue() {
    let host = MockHost::interactive();
    let scheduler = SlotScheduler::new();

    let ask = ModalItem::create(
        &host,
        DialogContent::new("apply update now?")
            .with_id("update")
            .with_title("Update")
            .with_buttons(vec!["Later".to_string(), "Now".to_string()]),
    )
    .unwrap();

    let pressed = Rc::new(RefCell::new(None));
    let sink = pressed.clone();
    ask.borrow_mut().set_on_click(move |button| *sink.borrow_mut() = Some(button));

    let next = dialog(&host, "next", Priority::Normal);
    scheduler.submit(ask.clone());
    scheduler.submit(next.clone());

    ask.borrow_mut().click(1);
    assert_eq!(*pressed.borrow(), Some(1));
    assert_eq!(scheduler.current_id().as_deref(), Some("next"));
}

/// Integration test: clear_all while one shows and one waits ends fully
/// idle with a single teardown
#[test]
fn test_clear_all_ends_idle() {
    let host = MockHost::interactive();
    let scheduler = SlotScheduler::new();

    scheduler.submit(dialog(&host, "a", Priority::Normal));
    scheduler.submit(dialog(&host, "b", Priority::Normal));

    scheduler.clear_all();

    assert!(scheduler.is_idle());
    assert_eq!(scheduler.pending(), 0);
    assert_eq!(host.surface().withdrawn_count("a"), 1);
    assert_eq!(host.surface().presented_count("b"), 0);
}

/// Integration test: removal targets showing and queued items differently
#[test]
fn test_remove_by_id_paths() {
    let host = MockHost::interactive();
    let scheduler = SlotScheduler::new();

    scheduler.submit(dialog(&host, "a", Priority::Normal));
    scheduler.submit(dialog(&host, "b", Priority::Normal));
    scheduler.submit(dialog(&host, "c", Priority::Normal));

    // Queued: dropped silently.
    scheduler.remove_by_id("b");
    assert_eq!(scheduler.pending(), 1);
    assert_eq!(host.surface().presented_count("b"), 0);

    // Showing: dismissed normally, the queue advances.
    scheduler.remove_by_id("a");
    assert_eq!(scheduler.current_id().as_deref(), Some("c"));

    // Unknown and empty ids: no-ops.
    scheduler.remove_by_id("b");
    scheduler.remove_by_id("");
    assert_eq!(scheduler.current_id().as_deref(), Some("c"));
}

/// Integration test: drain to idle, then every further operation is a no-op
#[test]
fn test_drain_to_idle_and_stay_quiet() {
    let host = MockHost::interactive();
    let scheduler = SlotScheduler::new();

    let items = [
        dialog(&host, "a", Priority::Normal),
        dialog(&host, "b", Priority::Error),
        dialog(&host, "c", Priority::Low),
    ];
    for item in &items {
        scheduler.submit(item.clone());
    }

    while let Some(id) = scheduler.current_id() {
        let showing = items.iter().find(|item| item.borrow().id() == id).unwrap();
        showing.borrow_mut().dismiss();
    }

    assert!(scheduler.is_idle());
    let events = host.surface().events().len();
    scheduler.remove_by_id("a");
    scheduler.clear_all();
    assert_eq!(host.surface().events().len(), events);
}

/// Integration test: content value serialization round-trip
#[test]
fn test_content_serialization_roundtrip() {
    let content = DialogContent::new("disk almost full")
        .with_id("disk")
        .with_title("Storage")
        .with_priority(Priority::Error);

    let json = serde_json::to_string(&content).unwrap();
    let restored: DialogContent = serde_json::from_str(&json).unwrap();

    assert_eq!(content, restored);
    assert!(json.contains("\"priority\":\"error\""));
}
