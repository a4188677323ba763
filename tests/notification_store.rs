// SPDX-License-Identifier: MPL-2.0
//! End-to-end behavior of the notification system through its public API.

use proptest::prelude::*;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};
use tryon_studio::ui::notifications::{
    Draft, Kind, NotificationId, Notifier, State, ToastSettings,
};

fn unread_flags(state: &State) -> Vec<bool> {
    state.iter().map(|n| !n.is_read()).collect()
}

#[test]
fn notify_info_on_empty_store() {
    let mut notifier = Notifier::default();
    let id = notifier.notify(Kind::Info, "Hello", None);

    let state = notifier.snapshot();
    assert_eq!(state.len(), 1);
    assert_eq!(state.unread_count(), 1);
    let record = state.get(id).expect("stored");
    assert!(!record.is_read());
    assert_eq!(record.message(), "Hello");
    assert_eq!(record.title(), None);
}

#[test]
fn acknowledge_marks_read() {
    let mut notifier = Notifier::default();
    let id = notifier.info("Hello");
    notifier.acknowledge(id);

    let state = notifier.snapshot();
    assert_eq!(state.unread_count(), 0);
    assert!(state.get(id).is_some_and(|n| n.is_read()));
}

#[test]
fn acknowledge_is_idempotent() {
    let mut notifier = Notifier::default();
    let id = notifier.info("Hello");
    notifier.info("World");
    notifier.acknowledge(id);
    notifier.acknowledge(id);

    assert_eq!(notifier.unread_count(), 1);
}

#[test]
fn newest_notification_comes_first() {
    let mut notifier = Notifier::default();
    notifier.notify(Kind::Error, "A", None);
    notifier.notify(Kind::Success, "B", None);

    let state = notifier.snapshot();
    let messages: Vec<&str> = state.iter().map(|n| n.message()).collect();
    assert_eq!(messages, vec!["B", "A"]);
}

#[test]
fn acknowledge_all_reads_everything() {
    let mut notifier = Notifier::default();
    notifier.info("one");
    notifier.warning("two");
    notifier.error("three");
    notifier.acknowledge_all();

    let state = notifier.snapshot();
    assert_eq!(state.unread_count(), 0);
    assert!(state.iter().all(|n| n.is_read()));
}

#[test]
fn reset_empties_store() {
    let mut notifier = Notifier::default();
    notifier.info("one");
    notifier.info("two");
    notifier.reset();

    let state = notifier.snapshot();
    assert!(state.is_empty());
    assert_eq!(state.unread_count(), 0);
}

#[test]
fn dismiss_missing_id_leaves_state_unchanged() {
    let mut notifier = Notifier::default();
    let kept = notifier.info("kept");
    let removed = notifier.info("removed");
    notifier.dismiss(removed);

    let before = notifier.snapshot();
    notifier.dismiss(removed);
    let after = notifier.snapshot();

    assert_eq!(before.len(), after.len());
    assert_eq!(after.unread_count(), 1);
    assert!(after.get(kept).is_some());
}

#[test]
fn stale_ids_after_reset_are_ignored() {
    let mut notifier = Notifier::default();
    let ids: Vec<NotificationId> = (0..3).map(|i| notifier.info(format!("n{i}"))).collect();
    notifier.reset();

    for id in ids {
        notifier.acknowledge(id);
        notifier.dismiss(id);
    }
    assert!(notifier.snapshot().is_empty());
    assert_eq!(notifier.unread_count(), 0);
}

#[test]
fn old_snapshots_are_not_mutated() {
    let mut notifier = Notifier::default();
    let id = notifier.info("Hello");
    let before = notifier.snapshot();

    notifier.acknowledge(id);
    notifier.error("later");

    assert_eq!(before.len(), 1);
    assert_eq!(before.unread_count(), 1);
    assert!(before.get(id).is_some_and(|n| !n.is_read()));
}

#[test]
fn titles_from_drafts_are_kept() {
    let mut notifier = Notifier::default();
    let id = notifier.post(Draft::success("Item uploaded").with_title("Upload successful"));
    let state = notifier.snapshot();
    assert_eq!(state.get(id).and_then(|n| n.title()), Some("Upload successful"));
}

#[test]
fn ids_are_unique() {
    let mut notifier = Notifier::default();
    let a = notifier.info("a");
    let b = notifier.info("b");
    assert_ne!(a, b);
}

// ---------------------------------------------------------------------------
// Listeners
// ---------------------------------------------------------------------------

#[test]
fn listeners_receive_every_snapshot() {
    let mut notifier = Notifier::default();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    notifier.subscribe(Box::new(move |state| {
        if let Ok(mut counts) = sink.lock() {
            counts.push(state.unread_count());
        }
    }));

    let id = notifier.info("one");
    notifier.info("two");
    notifier.acknowledge(id);
    notifier.reset();

    assert_eq!(*seen.lock().expect("lock"), vec![1, 2, 1, 0]);
}

#[test]
fn unsubscribed_listener_stops_receiving() {
    let mut notifier = Notifier::default();
    let calls = Arc::new(Mutex::new(0_usize));
    let counter = Arc::clone(&calls);
    let id = notifier.subscribe(Box::new(move |_| {
        if let Ok(mut calls) = counter.lock() {
            *calls += 1;
        }
    }));

    notifier.info("one");
    assert!(notifier.unsubscribe(id));
    assert!(!notifier.unsubscribe(id));
    notifier.info("two");

    assert_eq!(*calls.lock().expect("lock"), 1);
}

// ---------------------------------------------------------------------------
// Toasts
// ---------------------------------------------------------------------------

#[test]
fn toast_does_not_affect_unread_count() {
    let mut notifier = Notifier::default();
    notifier.success("saved");
    let key = notifier.toasts().visible().next().map(|t| t.key()).expect("toast");

    notifier.toasts_mut().dismiss(key);
    assert!(!notifier.toasts().has_toasts());
    assert_eq!(notifier.unread_count(), 1);
}

#[test]
fn overflow_toasts_queue_and_promote() {
    let settings = ToastSettings {
        max_visible: 2,
        ..ToastSettings::default()
    };
    let mut notifier = Notifier::new(settings);
    notifier.info("1");
    notifier.info("2");
    notifier.info("3");

    assert_eq!(notifier.toasts().visible_count(), 2);
    assert_eq!(notifier.toasts().queued_count(), 1);

    let first = notifier.toasts().visible().next().map(|t| t.key()).expect("toast");
    notifier.toasts_mut().dismiss(first);

    let messages: Vec<&str> = notifier.toasts().visible().map(|t| t.message()).collect();
    assert_eq!(messages, vec!["2", "3"]);
    assert_eq!(notifier.toasts().queued_count(), 0);
}

#[test]
fn toasts_expire_by_kind() {
    let settings = ToastSettings {
        max_visible: 5,
        success: Duration::from_secs(4),
        info: Duration::from_secs(4),
        warning: Duration::from_secs(6),
        error: Duration::from_secs(8),
    };
    let mut notifier = Notifier::new(settings);
    notifier.success("ok");
    notifier.warning("careful");
    notifier.error("broken");

    let start = Instant::now();
    notifier.toasts_mut().tick_at(start + Duration::from_secs(5));
    let kinds: Vec<Kind> = notifier.toasts().visible().map(|t| t.kind()).collect();
    assert_eq!(kinds, vec![Kind::Warning, Kind::Error]);

    notifier.toasts_mut().tick_at(start + Duration::from_secs(7));
    assert_eq!(notifier.toasts().visible_count(), 1);

    notifier.toasts_mut().tick_at(start + Duration::from_secs(9));
    assert!(!notifier.toasts().has_toasts());

    // The store keeps every record.
    assert_eq!(notifier.unread_count(), 3);
}

// ---------------------------------------------------------------------------
// Property: unread count always matches the records
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
enum Op {
    Notify(u8),
    Acknowledge(usize),
    AcknowledgeAll,
    Dismiss(usize),
    Reset,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (0u8..4).prop_map(Op::Notify),
        3 => (0usize..16).prop_map(Op::Acknowledge),
        1 => Just(Op::AcknowledgeAll),
        2 => (0usize..16).prop_map(Op::Dismiss),
        1 => Just(Op::Reset),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn unread_count_matches_records(ops in prop::collection::vec(op_strategy(), 0..64)) {
        let mut notifier = Notifier::default();
        let mut issued: Vec<NotificationId> = Vec::new();

        for op in ops {
            match op {
                Op::Notify(kind) => {
                    let kind = Kind::ALL[usize::from(kind) % Kind::ALL.len()];
                    issued.push(notifier.notify(kind, "message", None));
                }
                // Indices may point at removed or never-issued ids.
                Op::Acknowledge(i) => {
                    if let Some(id) = issued.get(i).copied() {
                        notifier.acknowledge(id);
                    }
                }
                Op::AcknowledgeAll => notifier.acknowledge_all(),
                Op::Dismiss(i) => {
                    if let Some(id) = issued.get(i).copied() {
                        notifier.dismiss(id);
                    }
                }
                Op::Reset => notifier.reset(),
            }

            let state = notifier.snapshot();
            let unread = unread_flags(&state).into_iter().filter(|u| *u).count();
            prop_assert_eq!(state.unread_count(), unread);
        }
    }
}
