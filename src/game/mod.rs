//! Game aggregate: setup, turns, and the event log

pub mod events;
pub mod state;

pub use events::{EventLog, EventType, GameEvent};
pub use state::GameState;
