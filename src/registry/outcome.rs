use crate::error::BookingError;
use crate::room::{Customer, RoomId};

/// Result of a booking request that did not fail outright.
#[derive(Clone, Debug, PartialEq)]
pub enum BookingOutcome {
    Booked {
        room: RoomId,
        customer: Customer,
    },
    /// The room was taken; the customer joined the waitlist instead.
    Waitlisted {
        room: RoomId,
        customer: Customer,
        position: usize,
    },
}

impl BookingOutcome {
    pub fn is_booked(&self) -> bool {
        matches!(self, BookingOutcome::Booked { .. })
    }

    pub fn customer(&self) -> &Customer {
        match self {
            BookingOutcome::Booked { customer, .. } | BookingOutcome::Waitlisted { customer, .. } => {
                customer
            }
        }
    }
}

/// What happened to the head of the waitlist after a check-out.
#[derive(Clone, Debug, PartialEq)]
pub enum Promotion {
    WaitlistEmpty,
    Promoted(Customer),
    /// The candidate could not be booked. The check-out still stands.
    Rejected {
        candidate: Customer,
        reason: BookingError,
        requeued: bool,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub struct CheckOutOutcome {
    pub room: RoomId,
    pub departed: Customer,
    pub promotion: Promotion,
}

impl CheckOutOutcome {
    pub fn promoted(&self) -> Option<&Customer> {
        match &self.promotion {
            Promotion::Promoted(customer) => Some(customer),
            _ => None,
        }
    }
}
