mod customer;
mod room;

pub use customer::Customer;
pub use room::{Room, RoomId, RoomStatus};
