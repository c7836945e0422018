//! Game configuration with documented defaults
//!
//! Values come from `GameConfig::default()`, a TOML file, or both, with
//! command-line flags applied on top by the binary.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::core::error::{GameError, Result};

/// Smallest ring that gives every territory two distinct neighbors
pub const MIN_TERRITORIES: u32 = 3;

/// Largest ring the game will build
pub const MAX_TERRITORIES: u32 = 10_000;

/// Most players a single game can seat
pub const MAX_PLAYERS: u32 = 1_000;

/// Troops placed on every territory during the initial distribution
pub const DEFAULT_STARTING_TROOPS: u32 = 3;

/// Upper bound on starting troops; a full garrison's dice total stays far
/// below `u32::MAX`
pub const MAX_STARTING_TROOPS: u32 = 1_000_000;

/// Setup parameters for a single game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Number of territories on the ring map
    pub territory_count: u32,

    /// Number of players taking turns
    pub player_count: u32,

    /// Troops each territory receives when first distributed
    ///
    /// Must be at least 1; a territory with a single troop can hold but
    /// never attack, since one troop always stays behind.
    pub starting_troops: u32,

    /// Dice seed for reproducible games; `None` seeds from OS entropy
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            territory_count: 6,
            player_count: 2,
            starting_troops: DEFAULT_STARTING_TROOPS,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_counts(territory_count: u32, player_count: u32) -> Self {
        Self {
            territory_count,
            player_count,
            ..Self::default()
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Parse a config from TOML text; missing keys fall back to defaults
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: GameConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config from a TOML file on disk
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.player_count < 1 {
            return Err(GameError::Configuration(
                "player_count must be at least 1".into(),
            ));
        }

        if self.player_count > MAX_PLAYERS {
            return Err(GameError::Configuration(format!(
                "player_count ({}) must be at most {}",
                self.player_count, MAX_PLAYERS
            )));
        }

        if self.territory_count < MIN_TERRITORIES {
            return Err(GameError::Configuration(format!(
                "territory_count ({}) must be at least {}",
                self.territory_count, MIN_TERRITORIES
            )));
        }

        if self.territory_count > MAX_TERRITORIES {
            return Err(GameError::Configuration(format!(
                "territory_count ({}) must be at most {}",
                self.territory_count, MAX_TERRITORIES
            )));
        }

        if self.starting_troops < 1 {
            return Err(GameError::Configuration(
                "starting_troops must be at least 1".into(),
            ));
        }

        if self.starting_troops > MAX_STARTING_TROOPS {
            return Err(GameError::Configuration(format!(
                "starting_troops ({}) must be at most {}",
                self.starting_troops, MAX_STARTING_TROOPS
            )));
        }

        Ok(())
    }
}
