//! In-memory front desk for a small hotel.
//!
//! [`HotelRegistry`] owns the rooms, the index of who holds which room, the
//! waitlist and the action log. Rooms move `Available -> Booked -> Occupied ->
//! Available`; booking a taken room puts the guest on the waitlist, checking a
//! guest out hands the room to the head of the waitlist, and
//! [`HotelRegistry::undo_last_action`] walks the log back one entry at a time.

mod config;
mod error;
mod history;
mod notify;
mod registry;
mod room;
mod shared;
mod waitlist;

#[cfg(feature = "emitter")]
mod emitter;

pub use config::{PromotionFallback, RegistryConfig};
pub use error::{BookingError, ConfigError};
pub use history::{Action, ActionLog};
pub use notify::Notification;
pub use registry::{BookingOutcome, CheckOutOutcome, HotelRegistry, Promotion, RegistryView};
pub use room::{Customer, Room, RoomId, RoomStatus};
pub use shared::SharedRegistry;
pub use waitlist::Waitlist;

#[cfg(feature = "emitter")]
pub use emitter::RegistryEmitter;

// Re-export the EventEmitter from the event_emitter_rs crate
#[cfg(feature = "emitter")]
pub use event_emitter_rs::EventEmitter;
