use std::collections::HashMap;

use tracing::{debug, info, warn};

use super::outcome::{BookingOutcome, CheckOutOutcome, Promotion};
use super::view::RegistryView;
use crate::config::{PromotionFallback, RegistryConfig};
use crate::error::BookingError;
use crate::history::{Action, ActionLog};
use crate::notify::Notification;
use crate::room::{Customer, Room, RoomId};
use crate::waitlist::Waitlist;

/// The front desk: rooms, who holds which room, the waitlist and the action log.
///
/// Every operation validates before it mutates, so a returned error means
/// nothing changed. The one compound operation is [`check_out`], which commits
/// the departure first and then tries to book the head of the waitlist into
/// the vacated room as a separate step.
///
/// [`check_out`]: HotelRegistry::check_out
#[derive(Debug, Default)]
pub struct HotelRegistry {
    config: RegistryConfig,
    rooms: Vec<Room>,
    index: HashMap<RoomId, usize>,
    customers: HashMap<String, RoomId>,
    waitlist: Waitlist,
    history: ActionLog,
    notifications: Vec<Notification>,
}

impl HotelRegistry {
    /// Create an empty registry with the default configuration.
    pub fn new() -> Self {
        HotelRegistry::default()
    }

    /// Create an empty registry with the given configuration.
    pub fn with_config(config: RegistryConfig) -> Self {
        HotelRegistry {
            config,
            ..HotelRegistry::default()
        }
    }

    /// The configuration this registry was built with.
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Start queueing notifications from the next operation on.
    pub(crate) fn enable_notifications(&mut self) {
        self.config.notifications = true;
    }

    /// Register a new, available room.
    pub fn add_room(
        &mut self,
        id: impl Into<RoomId>,
        room_type: impl Into<String>,
        price: f64,
    ) -> Result<&Room, BookingError> {
        let id = id.into();
        if self.index.contains_key(&id) {
            return Err(BookingError::DuplicateRoom(id));
        }
        if !price.is_finite() || price < 0.0 {
            return Err(BookingError::InvalidPrice { room: id, price });
        }

        let room = Room::new(id.clone(), room_type, price);
        debug!(room = %id, room_type = room.room_type(), price, "room added");
        self.notify(Notification::RoomAdded {
            room: id.clone(),
            room_type: room.room_type().to_string(),
            price,
        });

        let slot = self.rooms.len();
        self.rooms.push(room);
        self.index.insert(id, slot);
        Ok(&self.rooms[slot])
    }

    /// Book a room, or put the customer on the waitlist if it is taken.
    pub fn book_room(
        &mut self,
        id: &str,
        name: impl Into<String>,
        phone: impl Into<String>,
    ) -> Result<BookingOutcome, BookingError> {
        let slot = self.slot(id)?;
        let customer = Customer::new(name, phone);
        self.ensure_unbooked(&customer.name)?;

        let room = self.rooms[slot].id().clone();
        if !self.rooms[slot].is_available() {
            debug!(room = %room, customer = %customer.name, "room taken, diverting to waitlist");
            let position = self.enqueue(Some(room.clone()), customer.clone());
            return Ok(BookingOutcome::Waitlisted {
                room,
                customer,
                position,
            });
        }

        self.commit_booking(slot, customer.clone());
        Ok(BookingOutcome::Booked { room, customer })
    }

    /// Append to the tail of the waitlist. Always succeeds; returns the
    /// 1-based position.
    pub fn add_to_waitlist(&mut self, name: impl Into<String>, phone: impl Into<String>) -> usize {
        self.enqueue(None, Customer::new(name, phone))
    }

    /// Move a booked room to occupied.
    pub fn check_in(&mut self, id: &str) -> Result<&Room, BookingError> {
        let slot = self.slot(id)?;
        let room = &mut self.rooms[slot];
        let guest = room.occupy()?;
        let id = room.id().clone();

        debug!(room = %id, customer = %guest.name, "guest checked in");
        self.history.record(Action::CheckIn { room: id.clone() });
        self.notify(Notification::GuestCheckedIn {
            room: id,
            customer: guest,
        });
        Ok(&self.rooms[slot])
    }

    /// Check the guest out, then hand the room to the head of the waitlist.
    ///
    /// The check-out is committed before the promotion is attempted. A refused
    /// promotion is reported in the outcome, never as an error.
    pub fn check_out(&mut self, id: &str) -> Result<CheckOutOutcome, BookingError> {
        let slot = self.slot(id)?;
        let room = &mut self.rooms[slot];
        let departed = room.vacate()?;
        let id = room.id().clone();

        self.history.record(Action::CheckOut {
            room: id.clone(),
            customer: departed.clone(),
        });
        self.customers.remove(&departed.name);
        debug!(room = %id, customer = %departed.name, "guest checked out");
        self.notify(Notification::GuestCheckedOut {
            room: id.clone(),
            customer: departed.clone(),
        });

        let promotion = match self.waitlist.pop() {
            Some(candidate) => self.promote(slot, candidate),
            None => Promotion::WaitlistEmpty,
        };

        Ok(CheckOutOutcome {
            room: id,
            departed,
            promotion,
        })
    }

    /// Reverse the most recent entry in the action log.
    ///
    /// Only rooms and the customer index are restored. Waitlist entries
    /// consumed by a promotion stay consumed.
    pub fn undo_last_action(&mut self) -> Result<Action, BookingError> {
        let slot = match self.history.last() {
            Some(action) => self.slot(action.room().as_str())?,
            None => return Err(BookingError::NoHistory),
        };
        let action = self.history.pop().ok_or(BookingError::NoHistory)?;

        let room = &mut self.rooms[slot];
        match &action {
            Action::Book { customer, .. } => {
                let released = room.release();
                debug_assert_eq!(released.as_ref().map(|c| c.name.as_str()), Some(customer.as_str()));
                self.customers.remove(customer);
            }
            Action::CheckIn { .. } => room.unoccupy(),
            Action::CheckOut { room: id, customer } => {
                room.reoccupy(customer.clone());
                self.customers.insert(customer.name.clone(), id.clone());
            }
        }

        info!(room = %action.room(), action = action.name(), "action undone");
        self.notify(Notification::ActionUndone {
            action: action.clone(),
        });
        Ok(action)
    }

    /// Rooms in the order they were added.
    pub fn view_rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// Waitlisted customers in arrival order.
    pub fn view_waitlist(&self) -> Vec<&Customer> {
        self.waitlist.iter().collect()
    }

    /// Owned copy of rooms and waitlist, ready to serialize.
    pub fn view(&self) -> RegistryView {
        RegistryView {
            rooms: self.rooms.clone(),
            waitlist: self.waitlist.iter().cloned().collect(),
        }
    }

    /// Look up a room by id.
    pub fn room(&self, id: &str) -> Option<&Room> {
        self.index.get(id).map(|&slot| &self.rooms[slot])
    }

    /// The room a customer currently holds, booked or occupied.
    pub fn room_of(&self, name: &str) -> Option<&RoomId> {
        self.customers.get(name)
    }

    /// The customer index: every guest with an active booking and their room.
    pub fn bookings(&self) -> impl Iterator<Item = (&str, &RoomId)> {
        self.customers.iter().map(|(name, room)| (name.as_str(), room))
    }

    pub fn waitlist(&self) -> &Waitlist {
        &self.waitlist
    }

    /// Logged actions, oldest first.
    pub fn history(&self) -> &[Action] {
        self.history.entries()
    }

    /// Number of registered rooms.
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Notifications queued since the last drain. Always empty unless
    /// [`RegistryConfig::notifications`] is set.
    pub fn pending_notifications(&self) -> &[Notification] {
        &self.notifications
    }

    /// Take every queued notification, oldest first.
    pub fn drain_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }

    fn notify(&mut self, notification: Notification) {
        if self.config.notifications {
            self.notifications.push(notification);
        }
    }

    fn slot(&self, id: &str) -> Result<usize, BookingError> {
        self.index
            .get(id)
            .copied()
            .ok_or_else(|| BookingError::RoomNotFound(RoomId::from(id)))
    }

    fn ensure_unbooked(&self, name: &str) -> Result<(), BookingError> {
        match self.customers.get(name) {
            Some(room) => Err(BookingError::CustomerAlreadyBooked {
                customer: name.to_string(),
                room: room.clone(),
            }),
            None => Ok(()),
        }
    }

    fn enqueue(&mut self, room: Option<RoomId>, customer: Customer) -> usize {
        let position = self.waitlist.push(customer.clone());
        debug!(customer = %customer.name, position, "customer waitlisted");
        self.notify(Notification::CustomerWaitlisted {
            room,
            customer,
            position,
        });
        position
    }

    fn commit_booking(&mut self, slot: usize, customer: Customer) {
        let room = &mut self.rooms[slot];
        let id = room.id().clone();
        room.book(customer.clone());
        self.customers.insert(customer.name.clone(), id.clone());
        self.history.record(Action::Book {
            room: id.clone(),
            customer: customer.name.clone(),
        });
        debug!(room = %id, customer = %customer.name, "room booked");
        self.notify(Notification::RoomBooked { room: id, customer });
    }

    // The room at `slot` has just been released, so the only way the booking
    // can be refused is the candidate already holding another room.
    fn promote(&mut self, slot: usize, candidate: Customer) -> Promotion {
        let room = self.rooms[slot].id().clone();
        if let Err(reason) = self.ensure_unbooked(&candidate.name) {
            let requeued = self.config.on_rejected_promotion == PromotionFallback::Requeue;
            if requeued {
                self.waitlist.push_front(candidate.clone());
            }
            warn!(room = %room, customer = %candidate.name, requeued, %reason, "waitlist promotion refused");
            self.notify(Notification::PromotionRejected {
                room,
                customer: candidate.clone(),
                reason: reason.to_string(),
                requeued,
            });
            return Promotion::Rejected {
                candidate,
                reason,
                requeued,
            };
        }

        info!(room = %room, customer = %candidate.name, "promoting from waitlist");
        self.notify(Notification::WaitlistPromoted {
            room,
            customer: candidate.clone(),
        });
        self.commit_booking(slot, candidate.clone());
        Promotion::Promoted(candidate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::room::RoomStatus;

    fn registry_with_single() -> HotelRegistry {
        let mut registry = HotelRegistry::new();
        registry.add_room("101", "Single", 100.0).unwrap();
        registry
    }

    #[test]
    fn add_room_starts_available() {
        let registry = registry_with_single();
        let room = registry.room("101").unwrap();
        assert_eq!(room.status(), RoomStatus::Available);
        assert!(room.occupant().is_none());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn duplicate_room_is_rejected() {
        let mut registry = registry_with_single();
        let err = registry.add_room("101", "Suite", 300.0).unwrap_err();
        assert_eq!(err, BookingError::DuplicateRoom(RoomId::from("101")));
        assert_eq!(registry.room("101").unwrap().room_type(), "Single");
    }

    #[test]
    fn negative_or_nan_price_is_rejected() {
        let mut registry = HotelRegistry::new();
        assert!(matches!(
            registry.add_room("1", "Single", -1.0),
            Err(BookingError::InvalidPrice { .. })
        ));
        assert!(matches!(
            registry.add_room("2", "Single", f64::NAN),
            Err(BookingError::InvalidPrice { .. })
        ));
        assert!(registry.is_empty());
    }

    #[test]
    fn add_room_is_not_logged() {
        let registry = registry_with_single();
        assert!(registry.history().is_empty());
    }

    #[test]
    fn booking_unknown_room() {
        let mut registry = HotelRegistry::new();
        let err = registry.book_room("404", "Alice", "555").unwrap_err();
        assert_eq!(err, BookingError::RoomNotFound(RoomId::from("404")));
        assert!(registry.waitlist().is_empty());
    }

    #[test]
    fn check_in_requires_booking() {
        let mut registry = registry_with_single();
        let err = registry.check_in("101").unwrap_err();
        assert_eq!(
            err,
            BookingError::NotBooked {
                room: RoomId::from("101"),
                status: RoomStatus::Available,
            }
        );
        assert!(registry.history().is_empty());
    }

    #[test]
    fn check_out_informational_errors_do_not_mutate() {
        let mut registry = registry_with_single();
        assert_eq!(
            registry.check_out("101").unwrap_err(),
            BookingError::AlreadyAvailable(RoomId::from("101"))
        );

        registry.book_room("101", "Alice", "555").unwrap();
        assert_eq!(
            registry.check_out("101").unwrap_err(),
            BookingError::NotYetCheckedIn(RoomId::from("101"))
        );
        assert_eq!(registry.room("101").unwrap().status(), RoomStatus::Booked);
        assert_eq!(registry.room_of("Alice"), Some(&RoomId::from("101")));
        assert_eq!(registry.history().len(), 1);
    }

    #[test]
    fn undo_with_empty_log() {
        let mut registry = registry_with_single();
        assert_eq!(registry.undo_last_action().unwrap_err(), BookingError::NoHistory);
    }

    #[test]
    fn default_registry_queues_nothing() {
        let mut registry = registry_with_single();
        assert!(!registry.config().notifications);

        for n in 0..1000 {
            registry.book_room("101", format!("guest-{}", n), "000").unwrap();
        }
        registry.check_in("101").unwrap();
        registry.check_out("101").unwrap();
        registry.undo_last_action().unwrap();

        assert!(registry.pending_notifications().is_empty());
    }

    #[test]
    fn drain_empties_the_queue() {
        let mut registry = HotelRegistry::with_config(RegistryConfig {
            notifications: true,
            ..RegistryConfig::default()
        });
        registry.add_room("101", "Single", 100.0).unwrap();
        registry.book_room("101", "Alice", "555").unwrap();

        let drained = registry.drain_notifications();
        let types: Vec<_> = drained.iter().map(Notification::event_type).collect();
        assert_eq!(types, vec!["RoomAdded", "RoomBooked"]);
        assert!(registry.pending_notifications().is_empty());
    }
}
