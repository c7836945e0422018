//! Attack resolution
//!
//! An attack commits troops from an owned territory against an adjacent one.
//! Each committed troop rolls one die; each defending troop rolls one die.
//! The attacker conquers only on a strictly higher total.

use serde::{Deserialize, Serialize};

use crate::combat::dice::DiceSource;
use crate::core::error::{GameError, Result};
use crate::core::types::{PlayerId, TerritoryId};
use crate::map::TerritoryGraph;
use crate::player::PlayerRegistry;

/// A single attack requested by a player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttackOrder {
    pub attacker: PlayerId,
    pub origin: TerritoryId,
    pub target: TerritoryId,
    /// Troops committed from the origin; at least one must stay behind
    pub troops: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttackOutcome {
    Conquest,
    Repelled,
}

/// Result of a resolved attack
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttackResult {
    pub outcome: AttackOutcome,
    pub attack_score: u32,
    pub defense_score: u32,
    /// Owner of the target before the attack
    pub previous_owner: Option<PlayerId>,
}

impl AttackResult {
    pub fn is_conquest(&self) -> bool {
        self.outcome == AttackOutcome::Conquest
    }
}

/// Check every precondition of an attack without touching any state
///
/// Checks run in a fixed order, so an order breaking several rules reports
/// the first: unknown territory, ownership, troop count, self-attack,
/// adjacency.
pub fn validate(graph: &TerritoryGraph, order: &AttackOrder) -> Result<()> {
    let origin = graph.territory(order.origin)?;
    graph.territory(order.target)?;

    if !origin.is_owned_by(order.attacker) {
        return Err(GameError::NotOwner {
            attacker: order.attacker,
            origin: order.origin,
        });
    }

    if order.troops == 0 || order.troops >= origin.troops {
        return Err(GameError::InsufficientTroops {
            committed: order.troops,
            available: origin.troops,
        });
    }

    if order.origin == order.target {
        return Err(GameError::SelfAttack(order.origin));
    }

    if !graph.are_adjacent(order.origin, order.target) {
        return Err(GameError::NotAdjacent {
            origin: order.origin,
            target: order.target,
        });
    }

    Ok(())
}

/// Resolve an attack and apply the outcome to the map and player counts
///
/// Either every check passes and the attack is applied, or an error is
/// returned and nothing has changed (no dice are rolled either). Only the
/// origin, the target, and the two players' counts are touched.
pub fn resolve_attack<D: DiceSource + ?Sized>(
    graph: &mut TerritoryGraph,
    players: &mut PlayerRegistry,
    dice: &mut D,
    order: &AttackOrder,
) -> Result<AttackResult> {
    validate(graph, order)?;

    let defenders = graph.territory(order.target)?.troops;
    let previous_owner = graph.territory(order.target)?.owner;

    // Both players whose counts may change must be registered before
    // anything is rolled or written.
    players.player(order.attacker)?;
    if let Some(owner) = previous_owner {
        players.player(owner)?;
    }

    // An empty territory rolls no dice and scores zero
    let attack_score = dice.roll_sum(order.troops);
    let defense_score = dice.roll_sum(defenders);

    tracing::debug!(
        "Attack {:?} -> {:?}: {} troops roll {} vs {} defenders roll {}",
        order.origin,
        order.target,
        order.troops,
        attack_score,
        defenders,
        defense_score
    );

    graph.remove_troops(order.origin, order.troops)?;

    let outcome = if attack_score > defense_score {
        // Taking back a territory the attacker already holds changes no counts
        if previous_owner != Some(order.attacker) {
            if let Some(loser) = previous_owner {
                players.decrement_territory_count(loser)?;
            }
            players.increment_territory_count(order.attacker)?;
        }

        graph.set_owner(order.target, Some(order.attacker))?;
        graph.set_troops(order.target, order.troops)?;

        tracing::info!(
            "{:?} conquered {:?} from {:?}",
            order.attacker,
            order.target,
            previous_owner
        );
        AttackOutcome::Conquest
    } else {
        tracing::debug!("Attack on {:?} repelled", order.target);
        AttackOutcome::Repelled
    };

    Ok(AttackResult {
        outcome,
        attack_score,
        defense_score,
        previous_owner,
    })
}
