use std::fmt;

use crate::room::{RoomId, RoomStatus};

#[derive(Debug, Clone, PartialEq)]
pub enum BookingError {
    DuplicateRoom(RoomId),
    RoomNotFound(RoomId),
    InvalidPrice {
        room: RoomId,
        price: f64,
    },
    CustomerAlreadyBooked {
        customer: String,
        room: RoomId,
    },
    NotBooked {
        room: RoomId,
        status: RoomStatus,
    },
    NotYetCheckedIn(RoomId),
    AlreadyAvailable(RoomId),
    NoHistory,
    LockPoisoned(&'static str),
}

impl fmt::Display for BookingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookingError::DuplicateRoom(room) => write!(f, "room {} already exists", room),
            BookingError::RoomNotFound(room) => write!(f, "room {} does not exist", room),
            BookingError::InvalidPrice { room, price } => {
                write!(f, "room {} cannot be priced at {}", room, price)
            }
            BookingError::CustomerAlreadyBooked { customer, room } => {
                write!(f, "{} is already booked in room {}", customer, room)
            }
            BookingError::NotBooked { room, status } => {
                write!(f, "room {} is not booked (status: {})", room, status)
            }
            BookingError::NotYetCheckedIn(room) => write!(
                f,
                "room {} is booked but not occupied yet, check in first",
                room
            ),
            BookingError::AlreadyAvailable(room) => {
                write!(f, "room {} is already available", room)
            }
            BookingError::NoHistory => write!(f, "no actions to undo"),
            BookingError::LockPoisoned(operation) => {
                write!(f, "registry lock poisoned during {}", operation)
            }
        }
    }
}

impl std::error::Error for BookingError {}

#[derive(Debug)]
pub enum ConfigError {
    Parse(serde_json::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Parse(e) => write!(f, "invalid registry config: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Parse(e) => Some(e),
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_identifiers() {
        let err = BookingError::CustomerAlreadyBooked {
            customer: "Alice".into(),
            room: RoomId::from("101"),
        };
        assert_eq!(err.to_string(), "Alice is already booked in room 101");

        let err = BookingError::NotBooked {
            room: RoomId::from("7"),
            status: RoomStatus::Occupied,
        };
        assert_eq!(err.to_string(), "room 7 is not booked (status: Occupied)");
    }

    #[test]
    fn config_error_exposes_source() {
        let parse = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = ConfigError::from(parse);
        assert!(std::error::Error::source(&err).is_some());
        assert!(err.to_string().starts_with("invalid registry config"));
    }
}
