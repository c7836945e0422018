//! Mission objectives
//!
//! Each variant carries its own parameters; `engine::evaluate` matches on the
//! variant to decide whether it is complete.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MissionKind {
    ConquerTerritories,
}

/// A per-player win condition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mission {
    /// Own at least `target` territories at the same time
    ConquerTerritories { target: u32 },
}

impl Mission {
    pub fn kind(&self) -> MissionKind {
        match self {
            Self::ConquerTerritories { .. } => MissionKind::ConquerTerritories,
        }
    }

    /// The threshold the mission is measured against
    pub fn target(&self) -> u32 {
        match self {
            Self::ConquerTerritories { target } => *target,
        }
    }

    /// Human-readable objective for display
    pub fn describe(&self) -> String {
        match self {
            Self::ConquerTerritories { target } => {
                format!("Control at least {} territories", target)
            }
        }
    }
}
