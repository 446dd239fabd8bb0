mod action;
mod log;

pub use action::Action;
pub use log::ActionLog;
