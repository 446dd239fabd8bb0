#![cfg(feature = "emitter")]

use std::sync::{Arc, Mutex};

use front_desk::{HotelRegistry, RegistryEmitter};

fn recorder(desk: &mut RegistryEmitter, events: &[&str]) -> Arc<Mutex<Vec<(String, serde_json::Value)>>> {
    let seen = Arc::new(Mutex::new(Vec::new()));
    for event in events {
        let sink = Arc::clone(&seen);
        let name = event.to_string();
        desk.on(event, move |payload: String| {
            let value = serde_json::from_str(&payload).unwrap();
            sink.lock().unwrap().push((name.clone(), value));
        });
    }
    seen
}

#[test]
fn check_out_with_promotion_reaches_listeners_in_order() {
    let mut desk = RegistryEmitter::new(HotelRegistry::new());
    desk.add_room("101", "Single", 100.0).unwrap();
    desk.book_room("101", "Alice", "555").unwrap();
    desk.book_room("101", "Bob", "222").unwrap();
    desk.check_in("101").unwrap();

    let seen = recorder(
        &mut desk,
        &["GuestCheckedOut", "WaitlistPromoted", "RoomBooked"],
    );
    desk.check_out("101").unwrap();

    let seen = seen.lock().unwrap();
    let names: Vec<_> = seen.iter().map(|(name, _)| name.as_str()).collect();
    assert_eq!(names, vec!["GuestCheckedOut", "WaitlistPromoted", "RoomBooked"]);
    assert_eq!(seen[0].1["customer"]["name"], "Alice");
    assert_eq!(seen[2].1["customer"]["name"], "Bob");
}

#[test]
fn waitlisting_and_undo_are_emitted() {
    let mut desk = RegistryEmitter::new(HotelRegistry::new());
    let seen = recorder(&mut desk, &["CustomerWaitlisted", "ActionUndone"]);

    desk.add_room("101", "Single", 100.0).unwrap();
    desk.book_room("101", "Alice", "555").unwrap();
    desk.book_room("101", "Bob", "222").unwrap();
    desk.undo_last_action().unwrap();

    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 2);
    assert_eq!(seen[0].1["room"], "101");
    assert_eq!(seen[0].1["position"], 1);
    assert_eq!(seen[1].1["action"]["action"], "Book");

    let registry = desk.into_registry();
    assert_eq!(registry.waitlist().len(), 1);
}
