use thiserror::Error;

use crate::core::types::{PlayerId, TerritoryId};

#[derive(Error, Debug)]
pub enum GameError {
    #[error("Invalid configuration: {0}")]
    Configuration(String),

    #[error("Territory not found: {0}")]
    InvalidTerritory(u32),

    #[error("Player not found: {0}")]
    UnknownPlayer(u32),

    #[error("Player {attacker:?} does not control territory {origin:?}")]
    NotOwner {
        attacker: PlayerId,
        origin: TerritoryId,
    },

    #[error("Cannot commit {committed} troops from a territory holding {available}")]
    InsufficientTroops { committed: u32, available: u32 },

    #[error("Territory {0:?} cannot attack itself")]
    SelfAttack(TerritoryId),

    #[error("Territory {target:?} is not adjacent to {origin:?}")]
    NotAdjacent {
        origin: TerritoryId,
        target: TerritoryId,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl GameError {
    /// True for errors that reject a single action without ending the game
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::InvalidTerritory(_)
                | Self::UnknownPlayer(_)
                | Self::NotOwner { .. }
                | Self::InsufficientTroops { .. }
                | Self::SelfAttack(_)
                | Self::NotAdjacent { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, GameError>;
