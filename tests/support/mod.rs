#![allow(dead_code)]

use front_desk::{HotelRegistry, RegistryConfig, RoomStatus};

/// Configuration with the notification queue switched on.
pub fn notifying() -> RegistryConfig {
    RegistryConfig {
        notifications: true,
        ..RegistryConfig::default()
    }
}

/// Three rooms, nobody booked.
pub fn hotel() -> HotelRegistry {
    hotel_with(RegistryConfig::default())
}

pub fn hotel_with(config: RegistryConfig) -> HotelRegistry {
    let mut registry = HotelRegistry::with_config(config);
    registry.add_room("101", "Single", 100.0).unwrap();
    registry.add_room("102", "Double", 150.0).unwrap();
    registry.add_room("201", "Suite", 320.5).unwrap();
    registry.drain_notifications();
    registry
}

/// Room 101 occupied by Alice.
pub fn hotel_with_alice_in_101() -> HotelRegistry {
    alice_in_101(hotel())
}

pub fn alice_in_101(mut registry: HotelRegistry) -> HotelRegistry {
    registry.book_room("101", "Alice", "555").unwrap();
    registry.check_in("101").unwrap();
    registry.drain_notifications();
    registry
}

pub fn status(registry: &HotelRegistry, id: &str) -> RoomStatus {
    registry.room(id).unwrap().status()
}

pub fn occupant(registry: &HotelRegistry, id: &str) -> Option<String> {
    registry
        .room(id)
        .unwrap()
        .occupant()
        .map(|c| c.name.clone())
}

pub fn waitlist_names(registry: &HotelRegistry) -> Vec<String> {
    registry
        .view_waitlist()
        .into_iter()
        .map(|c| c.name.clone())
        .collect()
}

/// Observable state undo is expected to restore: every room's status and
/// occupant, plus the customer index.
pub fn rooms_and_index(registry: &HotelRegistry) -> Vec<(String, RoomStatus, Option<String>, Option<String>)> {
    registry
        .view_rooms()
        .iter()
        .map(|room| {
            let occupant = room.occupant().map(|c| c.name.clone());
            let indexed = occupant
                .as_deref()
                .and_then(|name| registry.room_of(name))
                .map(|id| id.to_string());
            (room.id().to_string(), room.status(), occupant, indexed)
        })
        .collect()
}

/// Occupant present exactly when the room is not available, and the customer
/// index points back at the room for every occupant.
pub fn assert_consistent(registry: &HotelRegistry) {
    for room in registry.view_rooms() {
        match room.status() {
            RoomStatus::Available => assert!(
                room.occupant().is_none(),
                "available room {} has an occupant",
                room.id()
            ),
            RoomStatus::Booked | RoomStatus::Occupied => {
                let guest = room
                    .occupant()
                    .unwrap_or_else(|| panic!("room {} has no occupant", room.id()));
                assert_eq!(registry.room_of(&guest.name), Some(room.id()));
            }
        }
    }

    for (name, id) in registry.bookings() {
        let room = registry
            .room(id.as_str())
            .unwrap_or_else(|| panic!("{} indexed to unknown room {}", name, id));
        assert_ne!(room.status(), RoomStatus::Available);
        assert_eq!(room.occupant().map(|c| c.name.as_str()), Some(name));
    }
}
