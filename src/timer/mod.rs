pub mod color;
pub mod controller;
pub mod session;
pub mod ticker;

pub use controller::{RingState, TimerController};
pub use session::Minutes;
