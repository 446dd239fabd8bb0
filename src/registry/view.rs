use serde::Serialize;

use crate::room::{Customer, Room, RoomStatus};

/// Owned copy of everything a front-desk screen shows: rooms in the order
/// they were added and the waitlist in arrival order.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RegistryView {
    pub rooms: Vec<Room>,
    pub waitlist: Vec<Customer>,
}

impl RegistryView {
    /// How many rooms are in the given state.
    pub fn count(&self, status: RoomStatus) -> usize {
        self.rooms.iter().filter(|r| r.status() == status).count()
    }

    /// Pretty-printed JSON, rooms first.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
