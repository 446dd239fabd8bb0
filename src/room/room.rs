use std::borrow::Borrow;
use std::fmt;

use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

use super::customer::Customer;
use crate::error::BookingError;

/// Caller-supplied room number. Immutable once the room exists.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomId(String);

impl RoomId {
    /// Borrow the id as text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RoomId {
    fn from(id: &str) -> Self {
        RoomId(id.to_string())
    }
}

impl From<String> for RoomId {
    fn from(id: String) -> Self {
        RoomId(id)
    }
}

impl Borrow<str> for RoomId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoomStatus {
    Available,
    Booked,
    Occupied,
}

impl RoomStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoomStatus::Available => "Available",
            RoomStatus::Booked => "Booked",
            RoomStatus::Occupied => "Occupied",
        }
    }
}

impl fmt::Display for RoomStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

// The guest lives inside the state, so a booked or occupied room always has one.
#[derive(Clone, Debug, PartialEq)]
enum Occupancy {
    Vacant,
    Booked(Customer),
    Occupied(Customer),
}

/// A room record.
///
/// The occupant is present exactly when the status is `Booked` or `Occupied`.
/// Transitions are crate-private; outside code only reads rooms.
#[derive(Clone, Debug, PartialEq)]
pub struct Room {
    id: RoomId,
    room_type: String,
    price: f64,
    occupancy: Occupancy,
}

impl Room {
    pub(crate) fn new(id: RoomId, room_type: impl Into<String>, price: f64) -> Self {
        Room {
            id,
            room_type: room_type.into(),
            price,
            occupancy: Occupancy::Vacant,
        }
    }

    /// The room number.
    pub fn id(&self) -> &RoomId {
        &self.id
    }

    /// Free-text label such as "Single" or "Suite".
    pub fn room_type(&self) -> &str {
        &self.room_type
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn status(&self) -> RoomStatus {
        match self.occupancy {
            Occupancy::Vacant => RoomStatus::Available,
            Occupancy::Booked(_) => RoomStatus::Booked,
            Occupancy::Occupied(_) => RoomStatus::Occupied,
        }
    }

    /// The guest holding the room, booked or checked in.
    pub fn occupant(&self) -> Option<&Customer> {
        match &self.occupancy {
            Occupancy::Vacant => None,
            Occupancy::Booked(guest) | Occupancy::Occupied(guest) => Some(guest),
        }
    }

    pub fn is_available(&self) -> bool {
        self.occupancy == Occupancy::Vacant
    }

    /// Available -> Booked. Callers check availability first.
    pub(crate) fn book(&mut self, customer: Customer) {
        debug_assert!(self.is_available(), "booking room {} that is not available", self.id);
        self.occupancy = Occupancy::Booked(customer);
    }

    /// Booked -> Occupied, returning the guest who checked in.
    pub(crate) fn occupy(&mut self) -> Result<Customer, BookingError> {
        match &self.occupancy {
            Occupancy::Booked(guest) => {
                let guest = guest.clone();
                self.occupancy = Occupancy::Occupied(guest.clone());
                Ok(guest)
            }
            _ => Err(BookingError::NotBooked {
                room: self.id.clone(),
                status: self.status(),
            }),
        }
    }

    /// Occupied -> Available, returning the departing guest.
    pub(crate) fn vacate(&mut self) -> Result<Customer, BookingError> {
        match std::mem::replace(&mut self.occupancy, Occupancy::Vacant) {
            Occupancy::Occupied(guest) => Ok(guest),
            Occupancy::Booked(guest) => {
                self.occupancy = Occupancy::Booked(guest);
                Err(BookingError::NotYetCheckedIn(self.id.clone()))
            }
            Occupancy::Vacant => Err(BookingError::AlreadyAvailable(self.id.clone())),
        }
    }

    /// Booked -> Available, reversing a booking.
    pub(crate) fn release(&mut self) -> Option<Customer> {
        match std::mem::replace(&mut self.occupancy, Occupancy::Vacant) {
            Occupancy::Vacant => None,
            Occupancy::Booked(guest) | Occupancy::Occupied(guest) => Some(guest),
        }
    }

    /// Occupied -> Booked, reversing a check-in.
    pub(crate) fn unoccupy(&mut self) {
        debug_assert_eq!(self.status(), RoomStatus::Occupied, "room {}", self.id);
        if let Occupancy::Occupied(guest) = std::mem::replace(&mut self.occupancy, Occupancy::Vacant) {
            self.occupancy = Occupancy::Booked(guest);
        }
    }

    /// Available -> Occupied, reversing a check-out.
    pub(crate) fn reoccupy(&mut self, customer: Customer) {
        debug_assert!(self.is_available(), "room {} is not vacant", self.id);
        self.occupancy = Occupancy::Occupied(customer);
    }
}

impl Serialize for Room {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Room", 5)?;
        state.serialize_field("id", &self.id)?;
        state.serialize_field("room_type", &self.room_type)?;
        state.serialize_field("price", &self.price)?;
        state.serialize_field("status", &self.status())?;
        state.serialize_field("occupant", &self.occupant())?;
        state.end()
    }
}
