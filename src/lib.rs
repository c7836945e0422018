//! TechNova War - turn-based territorial conquest with dice combat

pub mod combat;
pub mod core;
pub mod game;
pub mod map;
pub mod mission;
pub mod player;
