mod outcome;
mod registry;
mod view;

pub use outcome::{BookingOutcome, CheckOutOutcome, Promotion};
pub use registry::HotelRegistry;
pub use view::RegistryView;
