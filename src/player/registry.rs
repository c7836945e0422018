//! Player registry
//!
//! `territory_count` is a cache of how many territories each player owns.
//! Only initial distribution and combat resolution write to it.

use serde::{Deserialize, Serialize};

use crate::core::error::{GameError, Result};
use crate::core::types::PlayerId;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub territory_count: u32,
}

impl Player {
    pub fn new(id: PlayerId) -> Self {
        Self {
            id,
            name: format!("Player {}", id.0),
            territory_count: 0,
        }
    }
}

/// All players in the game, indexed by `PlayerId`
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PlayerRegistry {
    players: Vec<Player>,
}

impl PlayerRegistry {
    /// Create `count` players with sequential ids and no territories
    pub fn create(count: u32) -> Self {
        Self {
            players: (0..count).map(|i| Player::new(PlayerId(i))).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn get(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id.index())
    }

    /// Look up a player, mapping a missing id to `UnknownPlayer`
    pub fn player(&self, id: PlayerId) -> Result<&Player> {
        self.get(id).ok_or(GameError::UnknownPlayer(id.0))
    }

    fn player_mut(&mut self, id: PlayerId) -> Result<&mut Player> {
        self.players
            .get_mut(id.index())
            .ok_or(GameError::UnknownPlayer(id.0))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.players.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = PlayerId> + '_ {
        self.players.iter().map(|p| p.id)
    }

    pub fn rename(&mut self, id: PlayerId, name: impl Into<String>) -> Result<()> {
        self.player_mut(id)?.name = name.into();
        Ok(())
    }

    pub fn increment_territory_count(&mut self, id: PlayerId) -> Result<u32> {
        let player = self.player_mut(id)?;
        player.territory_count += 1;
        Ok(player.territory_count)
    }

    pub fn decrement_territory_count(&mut self, id: PlayerId) -> Result<u32> {
        let player = self.player_mut(id)?;
        player.territory_count = player.territory_count.saturating_sub(1);
        Ok(player.territory_count)
    }

    /// Sum of every player's cached territory count
    pub fn total_territory_count(&self) -> u32 {
        self.players.iter().map(|p| p.territory_count).sum()
    }
}
