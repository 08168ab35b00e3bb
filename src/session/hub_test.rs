use std::cell::RefCell;
use std::rc::Rc;

use super::*;
use crate::session::storage::MemoryStorage;

// =============================================================
// Helpers
// =============================================================

/// Cloneable storage handle so tests can poke at the underlying keys
/// behind the hub's back (torn writes, another tab, and so on).
#[derive(Clone, Default)]
struct SharedStorage(Rc<MemoryStorage>);

impl SessionStorage for SharedStorage {
    fn read(&self, key: &str) -> Option<String> {
        self.0.read(key)
    }

    fn write(&self, key: &str, value: &str) {
        self.0.write(key, value);
    }

    fn remove(&self, key: &str) {
        self.0.remove(key);
    }
}

fn hub() -> Rc<SessionHub> {
    Rc::new(SessionHub::new(Box::new(MemoryStorage::default())))
}

fn hub_with_storage() -> (Rc<SessionHub>, SharedStorage) {
    let storage = SharedStorage::default();
    let hub = Rc::new(SessionHub::new(Box::new(storage.clone())));
    (hub, storage)
}

fn sample() -> Session {
    Session {
        token: "tok-1".to_owned(),
        user_id: 42,
        username: "alice".to_owned(),
    }
}

fn other() -> Session {
    Session {
        token: "tok-2".to_owned(),
        user_id: 7,
        username: "bob".to_owned(),
    }
}

// =============================================================
// Reads
// =============================================================

#[test]
fn current_is_none_on_a_fresh_hub() {
    assert_eq!(hub().current(), None);
}

#[test]
fn establish_then_current_round_trips() {
    let hub = hub();
    hub.establish(&sample());
    assert_eq!(hub.current(), Some(sample()));
}

#[test]
fn establish_replaces_a_previous_session() {
    let hub = hub();
    hub.establish(&sample());
    hub.establish(&other());
    assert_eq!(hub.current(), Some(other()));
}

#[test]
fn clear_then_current_is_none() {
    let hub = hub();
    hub.establish(&sample());
    hub.clear();
    assert_eq!(hub.current(), None);
}

#[test]
fn missing_token_reads_as_signed_out() {
    let (hub, storage) = hub_with_storage();
    storage.write(USER_ID_KEY, "42");
    storage.write(USERNAME_KEY, "alice");
    assert_eq!(hub.current(), None);
}

#[test]
fn missing_user_id_reads_as_signed_out() {
    let (hub, storage) = hub_with_storage();
    storage.write(TOKEN_KEY, "tok-1");
    storage.write(USERNAME_KEY, "alice");
    assert_eq!(hub.current(), None);
}

#[test]
fn missing_username_reads_as_signed_out() {
    let (hub, storage) = hub_with_storage();
    storage.write(TOKEN_KEY, "tok-1");
    storage.write(USER_ID_KEY, "42");
    assert_eq!(hub.current(), None);
}

#[test]
fn non_numeric_user_id_reads_as_signed_out() {
    let (hub, storage) = hub_with_storage();
    storage.write(TOKEN_KEY, "tok-1");
    storage.write(USER_ID_KEY, "not-a-number");
    storage.write(USERNAME_KEY, "alice");
    assert_eq!(hub.current(), None);
}

// =============================================================
// Notification ordering and visibility
// =============================================================

#[test]
fn listener_observes_fully_persisted_state_during_establish() {
    let hub = hub();
    let seen = Rc::new(RefCell::new(Vec::new()));

    let hub_in_listener = hub.clone();
    let seen_in_listener = seen.clone();
    hub.subscribe(move || {
        seen_in_listener
            .borrow_mut()
            .push(hub_in_listener.current());
    });

    hub.establish(&sample());
    assert_eq!(seen.borrow().as_slice(), &[Some(sample())]);
}

#[test]
fn listener_observes_no_leftover_fields_during_clear() {
    let hub = hub();
    let seen = Rc::new(RefCell::new(Vec::new()));

    let hub_in_listener = hub.clone();
    let seen_in_listener = seen.clone();
    hub.subscribe(move || {
        seen_in_listener
            .borrow_mut()
            .push(hub_in_listener.current());
    });

    hub.establish(&sample());
    hub.clear();
    assert_eq!(seen.borrow().as_slice(), &[Some(sample()), None]);
}

#[test]
fn listeners_run_in_registration_order() {
    let hub = hub();
    let order = Rc::new(RefCell::new(Vec::new()));

    for label in ["first", "second", "third"] {
        let order = order.clone();
        hub.subscribe(move || order.borrow_mut().push(label));
    }

    hub.establish(&sample());
    assert_eq!(order.borrow().as_slice(), &["first", "second", "third"]);
}

#[test]
fn every_listener_runs_before_the_mutation_returns() {
    let hub = hub();
    let trace = Rc::new(RefCell::new(Vec::new()));

    for label in ["a", "b"] {
        let trace = trace.clone();
        hub.subscribe(move || trace.borrow_mut().push(label));
    }

    hub.establish(&sample());
    trace.borrow_mut().push("returned");
    assert_eq!(trace.borrow().as_slice(), &["a", "b", "returned"]);
}

#[test]
fn clear_while_signed_out_still_notifies() {
    let hub = hub();
    let calls = Rc::new(RefCell::new(0));

    let calls_in_listener = calls.clone();
    hub.subscribe(move || *calls_in_listener.borrow_mut() += 1);

    hub.clear();
    assert_eq!(*calls.borrow(), 1);
}

#[test]
fn each_transition_notifies_once() {
    let hub = hub();
    let calls = Rc::new(RefCell::new(0));

    let calls_in_listener = calls.clone();
    hub.subscribe(move || *calls_in_listener.borrow_mut() += 1);

    hub.establish(&sample());
    hub.establish(&other());
    hub.clear();
    assert_eq!(*calls.borrow(), 3);
}

// =============================================================
// Subscription lifecycle
// =============================================================

#[test]
fn unsubscribed_listener_is_not_called() {
    let hub = hub();
    let calls = Rc::new(RefCell::new(0));

    let calls_in_listener = calls.clone();
    let id = hub.subscribe(move || *calls_in_listener.borrow_mut() += 1);
    hub.establish(&sample());
    hub.unsubscribe(id);
    hub.clear();

    assert_eq!(*calls.borrow(), 1);
}

#[test]
fn unsubscribe_twice_is_harmless() {
    let hub = hub();
    let id = hub.subscribe(|| {});
    hub.unsubscribe(id);
    hub.unsubscribe(id);
    hub.establish(&sample());
}

#[test]
fn unsubscribe_of_unknown_id_is_ignored() {
    let hub = hub();
    let calls = Rc::new(RefCell::new(0));

    let calls_in_listener = calls.clone();
    let keep = hub.subscribe(move || *calls_in_listener.borrow_mut() += 1);
    let drop_me = hub.subscribe(|| {});
    hub.unsubscribe(drop_me);
    hub.unsubscribe(drop_me);
    hub.establish(&sample());

    assert_eq!(*calls.borrow(), 1);
    hub.unsubscribe(keep);
}

#[test]
fn listener_unsubscribed_mid_dispatch_is_skipped_in_the_same_round() {
    let hub = hub();
    let order = Rc::new(RefCell::new(Vec::new()));
    let second_id = Rc::new(RefCell::new(None));

    // First listener removes the second; the second must not run this round.
    let hub_in_first = hub.clone();
    let order_in_first = order.clone();
    let second_in_first = second_id.clone();
    hub.subscribe(move || {
        order_in_first.borrow_mut().push("first");
        if let Some(id) = *second_in_first.borrow() {
            hub_in_first.unsubscribe(id);
        }
    });

    let order_in_second = order.clone();
    let id = hub.subscribe(move || order_in_second.borrow_mut().push("second"));
    *second_id.borrow_mut() = Some(id);

    let order_in_third = order.clone();
    hub.subscribe(move || order_in_third.borrow_mut().push("third"));

    hub.establish(&sample());
    assert_eq!(order.borrow().as_slice(), &["first", "third"]);
}

#[test]
fn listener_subscribed_mid_dispatch_waits_for_the_next_round() {
    let hub = hub();
    let order = Rc::new(RefCell::new(Vec::new()));

    let hub_in_first = hub.clone();
    let order_in_first = order.clone();
    hub.subscribe(move || {
        order_in_first.borrow_mut().push("first");
        let order_in_added = order_in_first.clone();
        hub_in_first.subscribe(move || order_in_added.borrow_mut().push("added"));
    });

    hub.establish(&sample());
    assert_eq!(order.borrow().as_slice(), &["first"]);

    hub.clear();
    // The original listener subscribes another copy every round; only the
    // ones registered before this round may run.
    assert_eq!(order.borrow().as_slice(), &["first", "first", "added"]);
}

#[test]
fn listener_ids_are_not_reused_after_unsubscribe() {
    let hub = hub();
    let first = hub.subscribe(|| {});
    hub.unsubscribe(first);
    let second = hub.subscribe(|| {});
    assert_ne!(first, second);
}
