use std::sync::{Arc, Mutex, MutexGuard};

use crate::config::RegistryConfig;
use crate::error::BookingError;
use crate::history::Action;
use crate::notify::Notification;
use crate::registry::{BookingOutcome, CheckOutOutcome, HotelRegistry, RegistryView};
use crate::room::{Customer, Room, RoomId};

/// A registry that can be handed to several threads.
///
/// One lock guards rooms, customers, waitlist and log together, and every
/// method holds it for the whole operation, so nobody can observe a vacated
/// room whose waitlist promotion has not happened yet.
#[derive(Clone, Default)]
pub struct SharedRegistry {
    inner: Arc<Mutex<HotelRegistry>>,
}

impl SharedRegistry {
    /// Create an empty shared registry with the default configuration.
    pub fn new() -> Self {
        SharedRegistry::default()
    }

    /// Create an empty shared registry with the given configuration.
    pub fn with_config(config: RegistryConfig) -> Self {
        SharedRegistry::from(HotelRegistry::with_config(config))
    }

    fn lock(&self, operation: &'static str) -> Result<MutexGuard<'_, HotelRegistry>, BookingError> {
        self.inner
            .lock()
            .map_err(|_| BookingError::LockPoisoned(operation))
    }

    /// Register a room; returns a copy of it.
    pub fn add_room(
        &self,
        id: impl Into<RoomId>,
        room_type: impl Into<String>,
        price: f64,
    ) -> Result<Room, BookingError> {
        let mut registry = self.lock("add_room")?;
        registry.add_room(id, room_type, price).cloned()
    }

    /// Book a room or waitlist the customer.
    pub fn book_room(
        &self,
        id: &str,
        name: impl Into<String>,
        phone: impl Into<String>,
    ) -> Result<BookingOutcome, BookingError> {
        self.lock("book_room")?.book_room(id, name, phone)
    }

    /// Append a customer to the waitlist.
    pub fn add_to_waitlist(
        &self,
        name: impl Into<String>,
        phone: impl Into<String>,
    ) -> Result<usize, BookingError> {
        Ok(self.lock("add_to_waitlist")?.add_to_waitlist(name, phone))
    }

    /// Check a guest in; returns a copy of the room.
    pub fn check_in(&self, id: &str) -> Result<Room, BookingError> {
        let mut registry = self.lock("check_in")?;
        registry.check_in(id).cloned()
    }

    /// Check a guest out and promote from the waitlist, under one lock.
    pub fn check_out(&self, id: &str) -> Result<CheckOutOutcome, BookingError> {
        self.lock("check_out")?.check_out(id)
    }

    /// Undo the most recent logged action.
    pub fn undo_last_action(&self) -> Result<Action, BookingError> {
        self.lock("undo_last_action")?.undo_last_action()
    }

    /// Copy of every room in insertion order.
    pub fn view_rooms(&self) -> Result<Vec<Room>, BookingError> {
        Ok(self.lock("view_rooms")?.view_rooms().to_vec())
    }

    /// Copy of the waitlist in arrival order.
    pub fn view_waitlist(&self) -> Result<Vec<Customer>, BookingError> {
        Ok(self.lock("view_waitlist")?.waitlist().iter().cloned().collect())
    }

    /// Owned snapshot of rooms and waitlist.
    pub fn view(&self) -> Result<RegistryView, BookingError> {
        Ok(self.lock("view")?.view())
    }

    /// Copy of a single room, if it exists.
    pub fn room(&self, id: &str) -> Result<Option<Room>, BookingError> {
        Ok(self.lock("room")?.room(id).cloned())
    }

    /// Take every queued notification.
    pub fn drain_notifications(&self) -> Result<Vec<Notification>, BookingError> {
        Ok(self.lock("drain_notifications")?.drain_notifications())
    }

    /// Run several operations under a single lock acquisition.
    pub fn with<T>(
        &self,
        f: impl FnOnce(&mut HotelRegistry) -> Result<T, BookingError>,
    ) -> Result<T, BookingError> {
        let mut registry = self.lock("with")?;
        f(&mut registry)
    }
}

impl From<HotelRegistry> for SharedRegistry {
    fn from(registry: HotelRegistry) -> Self {
        SharedRegistry {
            inner: Arc::new(Mutex::new(registry)),
        }
    }
}
