//! Topic-based event distribution.

pub mod bus;
pub mod types;

pub use bus::{Event, EventBus, Topic};
pub use types::{DuelEvent, FeedEvent, SystemEvent};
