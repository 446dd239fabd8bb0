use serde::{Deserialize, Serialize};

use crate::history::Action;
use crate::room::{Customer, RoomId};

/// Something the front desk did, queued for whoever renders or forwards it.
///
/// Notifications are queued in the order the registry performs the work, so a
/// check-out that promotes from the waitlist yields `GuestCheckedOut`, then
/// `WaitlistPromoted`, then `RoomBooked`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Notification {
    RoomAdded {
        room: RoomId,
        room_type: String,
        price: f64,
    },
    RoomBooked {
        room: RoomId,
        customer: Customer,
    },
    /// `room` is the room the customer asked for, if any.
    CustomerWaitlisted {
        room: Option<RoomId>,
        customer: Customer,
        position: usize,
    },
    GuestCheckedIn {
        room: RoomId,
        customer: Customer,
    },
    GuestCheckedOut {
        room: RoomId,
        customer: Customer,
    },
    WaitlistPromoted {
        room: RoomId,
        customer: Customer,
    },
    PromotionRejected {
        room: RoomId,
        customer: Customer,
        reason: String,
        requeued: bool,
    },
    ActionUndone {
        action: Action,
    },
}

impl Notification {
    pub fn event_type(&self) -> &'static str {
        match self {
            Notification::RoomAdded { .. } => "RoomAdded",
            Notification::RoomBooked { .. } => "RoomBooked",
            Notification::CustomerWaitlisted { .. } => "CustomerWaitlisted",
            Notification::GuestCheckedIn { .. } => "GuestCheckedIn",
            Notification::GuestCheckedOut { .. } => "GuestCheckedOut",
            Notification::WaitlistPromoted { .. } => "WaitlistPromoted",
            Notification::PromotionRejected { .. } => "PromotionRejected",
            Notification::ActionUndone { .. } => "ActionUndone",
        }
    }

    /// JSON payload, including the `type` tag.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
