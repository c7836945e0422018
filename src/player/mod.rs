//! Players and their cached territory counts

pub mod registry;

pub use registry::{Player, PlayerRegistry};
