//! Events and game logging

use serde::{Deserialize, Serialize};

use crate::core::types::{PlayerId, TerritoryId, Turn};
use crate::mission::Mission;

/// A recorded game event
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameEvent {
    pub id: u32,
    pub turn: Turn,
    pub event_type: EventType,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventType {
    // Setup
    GameStarted { territories: u32, players: u32 },
    MissionAssigned { player: PlayerId, mission: Mission },

    // Combat
    AttackRepelled {
        attacker: PlayerId,
        origin: TerritoryId,
        target: TerritoryId,
        troops: u32,
        attack_score: u32,
        defense_score: u32,
    },
    TerritoryConquered {
        attacker: PlayerId,
        origin: TerritoryId,
        target: TerritoryId,
        previous_owner: Option<PlayerId>,
        troops: u32,
        attack_score: u32,
        defense_score: u32,
    },

    // Turns
    TurnEnded { player: PlayerId },
    MissionCompleted { player: PlayerId },
}

/// Append-only log of everything that happened in a game
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct EventLog {
    pub events: Vec<GameEvent>,
    next_id: u32,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_event(&mut self, event_type: EventType, turn: Turn) {
        let event = GameEvent {
            id: self.next_id,
            turn,
            event_type,
        };
        self.next_id += 1;
        self.events.push(event);
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn events_in_turn(&self, turn: Turn) -> impl Iterator<Item = &GameEvent> {
        self.events.iter().filter(move |e| e.turn == turn)
    }

    /// Number of territories that changed hands
    pub fn conquest_count(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e.event_type, EventType::TerritoryConquered { .. }))
            .count()
    }
}
