pub mod engine;
pub mod objective;

pub use engine::{assign, conquest_target, evaluate};
pub use objective::{Mission, MissionKind};
