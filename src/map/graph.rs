//! Territory graph - dense arena of territories joined in a ring
//!
//! Neighbors are stored as ids into the same arena, so adjacency checks are
//! plain lookups. The graph does not know about player territory counts:
//! whoever calls `set_owner` must keep `Player::territory_count` in step.

use serde::{Deserialize, Serialize};

use crate::core::config::MIN_TERRITORIES;
use crate::core::error::{GameError, Result};
use crate::core::types::{PlayerId, TerritoryId};
use crate::map::territory::Territory;

/// All territories in the game, indexed by `TerritoryId`
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TerritoryGraph {
    territories: Vec<Territory>,
}

impl TerritoryGraph {
    /// Build `count` territories in a ring
    ///
    /// Territory `i` borders `(i - 1 + count) % count` and `(i + 1) % count`.
    pub fn build(count: u32) -> Result<Self> {
        if count < MIN_TERRITORIES {
            return Err(GameError::Configuration(format!(
                "a ring map needs at least {} territories, got {}",
                MIN_TERRITORIES, count
            )));
        }

        let territories = (0..count)
            .map(|i| {
                let previous = TerritoryId((i + count - 1) % count);
                let next = TerritoryId((i + 1) % count);
                Territory::new(TerritoryId(i), vec![previous, next])
            })
            .collect();

        Ok(Self { territories })
    }

    pub fn len(&self) -> usize {
        self.territories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.territories.is_empty()
    }

    pub fn contains(&self, id: TerritoryId) -> bool {
        id.index() < self.territories.len()
    }

    pub fn get(&self, id: TerritoryId) -> Option<&Territory> {
        self.territories.get(id.index())
    }

    pub fn get_mut(&mut self, id: TerritoryId) -> Option<&mut Territory> {
        self.territories.get_mut(id.index())
    }

    /// Look up a territory, mapping a missing id to `InvalidTerritory`
    pub fn territory(&self, id: TerritoryId) -> Result<&Territory> {
        self.get(id).ok_or(GameError::InvalidTerritory(id.0))
    }

    fn territory_mut(&mut self, id: TerritoryId) -> Result<&mut Territory> {
        self.get_mut(id).ok_or(GameError::InvalidTerritory(id.0))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Territory> {
        self.territories.iter()
    }

    /// True iff `b` is in `a`'s neighbor list; unknown ids are never adjacent
    pub fn are_adjacent(&self, a: TerritoryId, b: TerritoryId) -> bool {
        self.get(a).is_some_and(|t| t.borders(b))
    }

    /// Count territories currently owned by `player`
    pub fn ownership_count(&self, player: PlayerId) -> u32 {
        self.territories
            .iter()
            .filter(|t| t.is_owned_by(player))
            .count() as u32
    }

    /// All territories owned by `player`, in id order
    pub fn territories_of(&self, player: PlayerId) -> impl Iterator<Item = &Territory> {
        self.territories.iter().filter(move |t| t.is_owned_by(player))
    }

    /// Change a territory's owner, returning the previous owner
    pub fn set_owner(
        &mut self,
        id: TerritoryId,
        owner: Option<PlayerId>,
    ) -> Result<Option<PlayerId>> {
        let territory = self.territory_mut(id)?;
        Ok(std::mem::replace(&mut territory.owner, owner))
    }

    /// Overwrite a territory's garrison
    pub fn set_troops(&mut self, id: TerritoryId, troops: u32) -> Result<()> {
        self.territory_mut(id)?.troops = troops;
        Ok(())
    }

    /// Add troops to a territory, returning the new garrison
    pub fn add_troops(&mut self, id: TerritoryId, troops: u32) -> Result<u32> {
        let territory = self.territory_mut(id)?;
        territory.troops = territory.troops.saturating_add(troops);
        Ok(territory.troops)
    }

    /// Remove troops from a territory, floored at zero; returns the new garrison
    pub fn remove_troops(&mut self, id: TerritoryId, troops: u32) -> Result<u32> {
        let territory = self.territory_mut(id)?;
        territory.troops = territory.troops.saturating_sub(troops);
        Ok(territory.troops)
    }
}
