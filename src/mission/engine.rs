//! Mission assignment and evaluation

use crate::core::types::PlayerId;
use crate::map::TerritoryGraph;
use crate::mission::objective::Mission;
use crate::player::PlayerRegistry;

/// Territory threshold for the conquest mission: `floor(T / P) + 1`
///
/// One more than an even split, so nobody starts the game already winning.
/// Returns 0 when there are no players.
pub fn conquest_target(territory_count: u32, player_count: u32) -> u32 {
    match territory_count.checked_div(player_count) {
        Some(share) => share + 1,
        None => 0,
    }
}

/// Build one mission per player, indexed by `PlayerId`
pub fn assign(players: &PlayerRegistry, graph: &TerritoryGraph) -> Vec<Mission> {
    let target = conquest_target(graph.len() as u32, players.len() as u32);

    players
        .iter()
        .map(|player| {
            let mission = Mission::ConquerTerritories { target };
            tracing::info!("{} must {}", player.name, mission.describe().to_lowercase());
            mission
        })
        .collect()
}

/// Check whether `player` has completed `mission` on the current map
pub fn evaluate(mission: &Mission, graph: &TerritoryGraph, player: PlayerId) -> bool {
    match mission {
        Mission::ConquerTerritories { target } => graph.ownership_count(player) >= *target,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::TerritoryId;

    #[test]
    fn test_conquest_target_formula() {
        assert_eq!(conquest_target(6, 2), 4);
        assert_eq!(conquest_target(7, 2), 4);
        assert_eq!(conquest_target(6, 4), 2);
        assert_eq!(conquest_target(3, 5), 1);
        assert_eq!(conquest_target(6, 1), 7);
        assert_eq!(conquest_target(6, 0), 0);
    }

    #[test]
    fn test_assign_one_mission_per_player() {
        let graph = TerritoryGraph::build(9).unwrap();
        let players = PlayerRegistry::create(3);
        let missions = assign(&players, &graph);
        assert_eq!(missions.len(), 3);
        assert!(missions
            .iter()
            .all(|m| *m == Mission::ConquerTerritories { target: 4 }));
    }

    #[test]
    fn test_evaluate_counts_graph_ownership() {
        let mut graph = TerritoryGraph::build(6).unwrap();
        let mission = Mission::ConquerTerritories { target: 2 };
        let player = PlayerId(0);

        graph.set_owner(TerritoryId(0), Some(player)).unwrap();
        assert!(!evaluate(&mission, &graph, player));

        graph.set_owner(TerritoryId(3), Some(player)).unwrap();
        assert!(evaluate(&mission, &graph, player));
        assert!(!evaluate(&mission, &graph, PlayerId(1)));
    }
}
