//! Territory - a controllable node on the ring map

use serde::{Deserialize, Serialize};

use crate::core::types::{PlayerId, TerritoryId};

/// A graph node with an owner, a garrison, and fixed neighbors
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Territory {
    pub id: TerritoryId,
    pub name: String,

    // Ownership
    pub owner: Option<PlayerId>,
    pub troops: u32,

    // Geography (fixed at build time)
    pub neighbors: Vec<TerritoryId>,
}

impl Territory {
    /// Create an unowned, empty territory
    pub fn new(id: TerritoryId, neighbors: Vec<TerritoryId>) -> Self {
        Self {
            id,
            name: format!("Territory {}", id.0),
            owner: None,
            troops: 0,
            neighbors,
        }
    }

    pub fn is_owned_by(&self, player: PlayerId) -> bool {
        self.owner == Some(player)
    }

    pub fn borders(&self, other: TerritoryId) -> bool {
        self.neighbors.contains(&other)
    }
}
