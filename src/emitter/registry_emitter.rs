use event_emitter_rs::EventEmitter;
use tracing::warn;

use crate::error::BookingError;
use crate::history::Action;
use crate::registry::{BookingOutcome, CheckOutOutcome, HotelRegistry};
use crate::room::{Room, RoomId};

/// Wraps a registry and forwards its notifications to in-process listeners.
///
/// Wrapping turns on notification queueing for the registry. Each operation
/// mirrors the registry's. After a successful call every
/// notification queued by it is emitted as its JSON payload under its event
/// type, and the call returns once all listeners have run.
///
/// # Example
///
/// ```
/// use front_desk::{HotelRegistry, RegistryEmitter};
///
/// let mut desk = RegistryEmitter::new(HotelRegistry::new());
///
/// desk.on("RoomBooked", |payload| {
///     println!("booked: {}", payload);
/// });
///
/// desk.add_room("101", "Single", 100.0).unwrap();
/// desk.book_room("101", "Alice", "555").unwrap();
/// ```
pub struct RegistryEmitter {
    registry: HotelRegistry,
    event_emitter: EventEmitter,
}

impl RegistryEmitter {
    /// Wrap a registry; it queues notifications from here on.
    pub fn new(mut registry: HotelRegistry) -> Self {
        registry.enable_notifications();
        Self {
            registry,
            event_emitter: EventEmitter::new(),
        }
    }

    /// Get a reference to the underlying registry.
    pub fn registry(&self) -> &HotelRegistry {
        &self.registry
    }

    /// Unwrap and return the underlying registry.
    pub fn into_registry(self) -> HotelRegistry {
        self.registry
    }

    /// Register a listener for an event type. Returns the listener id.
    pub fn on<F>(&mut self, event_type: &str, listener: F) -> String
    where
        F: Fn(String) + Send + Sync + 'static,
    {
        self.event_emitter.on(event_type, listener)
    }

    /// Register a room and emit `RoomAdded`.
    pub fn add_room(
        &mut self,
        id: impl Into<RoomId>,
        room_type: impl Into<String>,
        price: f64,
    ) -> Result<Room, BookingError> {
        let room = self.registry.add_room(id, room_type, price)?.clone();
        self.emit_queued();
        Ok(room)
    }

    /// Book a room or waitlist the customer, then emit.
    pub fn book_room(
        &mut self,
        id: &str,
        name: impl Into<String>,
        phone: impl Into<String>,
    ) -> Result<BookingOutcome, BookingError> {
        let outcome = self.registry.book_room(id, name, phone)?;
        self.emit_queued();
        Ok(outcome)
    }

    /// Waitlist a customer and emit `CustomerWaitlisted`.
    pub fn add_to_waitlist(&mut self, name: impl Into<String>, phone: impl Into<String>) -> usize {
        let position = self.registry.add_to_waitlist(name, phone);
        self.emit_queued();
        position
    }

    /// Check a guest in and emit `GuestCheckedIn`.
    pub fn check_in(&mut self, id: &str) -> Result<Room, BookingError> {
        let room = self.registry.check_in(id)?.clone();
        self.emit_queued();
        Ok(room)
    }

    /// Check a guest out, promote from the waitlist, then emit.
    pub fn check_out(&mut self, id: &str) -> Result<CheckOutOutcome, BookingError> {
        let outcome = self.registry.check_out(id)?;
        self.emit_queued();
        Ok(outcome)
    }

    /// Undo the last logged action and emit `ActionUndone`.
    pub fn undo_last_action(&mut self) -> Result<Action, BookingError> {
        let action = self.registry.undo_last_action()?;
        self.emit_queued();
        Ok(action)
    }

    /// Emit everything the registry has queued, in order.
    pub fn emit_queued(&mut self) {
        for notification in self.registry.drain_notifications() {
            let payload = match notification.to_json() {
                Ok(payload) => payload,
                Err(e) => {
                    warn!(event_type = notification.event_type(), error = %e, "dropping unserializable notification");
                    continue;
                }
            };
            let handles = self.event_emitter.emit(notification.event_type(), payload);
            for handle in handles {
                if handle.join().is_err() {
                    warn!(event_type = notification.event_type(), "listener panicked");
                }
            }
        }
    }
}
