use std::fmt;

use serde::{Deserialize, Serialize};

use crate::room::{Customer, RoomId};

/// One successful mutation, recorded so it can be reversed.
///
/// `CheckOut` keeps a copy of the departing guest because the room's occupant
/// is cleared as part of the check-out.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action")]
pub enum Action {
    Book { room: RoomId, customer: String },
    CheckIn { room: RoomId },
    CheckOut { room: RoomId, customer: Customer },
}

impl Action {
    pub fn room(&self) -> &RoomId {
        match self {
            Action::Book { room, .. } | Action::CheckIn { room } | Action::CheckOut { room, .. } => {
                room
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Action::Book { .. } => "Book",
            Action::CheckIn { .. } => "CheckIn",
            Action::CheckOut { .. } => "CheckOut",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Book { room, customer } => {
                write!(f, "booking for room {} by {}", room, customer)
            }
            Action::CheckIn { room } => write!(f, "check-in for room {}", room),
            Action::CheckOut { room, customer } => {
                write!(f, "check-out for room {} by {}", room, customer.name)
            }
        }
    }
}
