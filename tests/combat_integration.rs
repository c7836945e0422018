//! Combat integration tests
//!
//! Drive attacks through `GameState` with scripted dice and check that every
//! outcome leaves the map and the player counts in agreement.

use technova_war::combat::{AttackOutcome, ScriptedDice};
use technova_war::core::{GameConfig, GameError, PlayerId, TerritoryId};
use technova_war::game::{EventType, GameState};
use technova_war::map::Territory;

fn game_with_rolls(rolls: Vec<u32>) -> GameState<ScriptedDice> {
    GameState::setup(
        GameConfig::with_counts(6, 2),
        &[],
        ScriptedDice::new(rolls).unwrap(),
    )
    .unwrap()
}

fn territory(game: &GameState<ScriptedDice>, id: u32) -> Territory {
    game.graph().get(TerritoryId(id)).unwrap().clone()
}

/// Committing every troop in the origin is rejected without touching the map
#[test]
fn test_committing_all_troops_is_rejected() {
    let mut game = game_with_rolls(vec![6]);
    let before = game.list_territories();

    let err = game
        .attack(PlayerId(0), TerritoryId(0), TerritoryId(1), 3)
        .unwrap_err();

    assert!(matches!(
        err,
        GameError::InsufficientTroops { committed: 3, available: 3 }
    ));
    assert!(err.is_recoverable());
    assert_eq!(game.list_territories(), before);
}

/// Attacking across the ring is rejected without touching the map
#[test]
fn test_non_adjacent_attack_is_rejected() {
    let mut game = game_with_rolls(vec![6]);
    let before = game.list_territories();

    let err = game
        .attack(PlayerId(0), TerritoryId(0), TerritoryId(3), 2)
        .unwrap_err();

    assert!(matches!(err, GameError::NotAdjacent { .. }));
    assert_eq!(game.list_territories(), before);
    assert_eq!(game.player(PlayerId(0)).unwrap().territory_count, 3);
}

/// Attack 10 against defense 5 conquers the target
#[test]
fn test_scripted_conquest() {
    // Two attack dice: 4 + 6 = 10. Three defense dice: 1 + 1 + 3 = 5.
    let mut game = game_with_rolls(vec![4, 6, 1, 1, 3]);

    let result = game
        .attack(PlayerId(0), TerritoryId(2), TerritoryId(1), 2)
        .unwrap();

    assert_eq!(result.outcome, AttackOutcome::Conquest);
    assert_eq!(result.attack_score, 10);
    assert_eq!(result.defense_score, 5);

    let target = territory(&game, 1);
    assert_eq!(target.owner, Some(PlayerId(0)));
    assert_eq!(target.troops, 2);
    assert_eq!(territory(&game, 2).troops, 1);

    assert_eq!(game.player(PlayerId(0)).unwrap().territory_count, 4);
    assert_eq!(game.player(PlayerId(1)).unwrap().territory_count, 2);
    assert_eq!(game.players().total_territory_count(), 6);
    assert!(game.is_consistent());
}

/// A failed attack costs exactly the committed troops and nothing else
#[test]
fn test_failed_attack_costs_committed_troops() {
    // One attack die: 2. Three defense dice: 2 + 2 + 2 = 6.
    let mut game = game_with_rolls(vec![2]);
    let target_before = territory(&game, 5);

    let result = game
        .attack(PlayerId(0), TerritoryId(0), TerritoryId(5), 1)
        .unwrap();

    assert_eq!(result.outcome, AttackOutcome::Repelled);
    assert_eq!(territory(&game, 0).troops, 2);
    assert_eq!(territory(&game, 5), target_before);
    assert!(game.is_consistent());

    let last = game.events().events.last().unwrap();
    assert!(matches!(last.event_type, EventType::AttackRepelled { troops: 1, .. }));
}

/// With a target of 4 out of 6, one conquest completes a two-player mission
#[test]
fn test_single_conquest_completes_mission() {
    // Two attack dice roll 6, three defense dice roll 1
    let mut game = game_with_rolls(vec![6, 6, 1, 1, 1]);

    game.attack(PlayerId(0), TerritoryId(0), TerritoryId(1), 2)
        .unwrap();
    assert!(game.check_victory(PlayerId(0)).unwrap());
    assert!(!game.check_victory(PlayerId(1)).unwrap());

    assert_eq!(game.end_turn().unwrap(), Some(PlayerId(0)));
    assert_eq!(game.events().conquest_count(), 1);
}

/// Every rejection reason maps to its own error
#[test]
fn test_rejection_taxonomy() {
    let mut game = game_with_rolls(vec![6]);

    let cases = [
        (PlayerId(0), 42, 1, 1),
        (PlayerId(0), 0, 42, 1),
        (PlayerId(1), 0, 1, 1),
        (PlayerId(0), 0, 1, 0),
        (PlayerId(0), 0, 0, 1),
        (PlayerId(0), 0, 2, 1),
    ];
    let errors: Vec<GameError> = cases
        .iter()
        .map(|&(p, o, t, n)| {
            game.attack(p, TerritoryId(o), TerritoryId(t), n)
                .unwrap_err()
        })
        .collect();

    assert!(matches!(errors[0], GameError::InvalidTerritory(42)));
    assert!(matches!(errors[1], GameError::InvalidTerritory(42)));
    assert!(matches!(errors[2], GameError::NotOwner { .. }));
    assert!(matches!(errors[3], GameError::InsufficientTroops { .. }));
    assert!(matches!(errors[4], GameError::SelfAttack(_)));
    assert!(matches!(errors[5], GameError::NotAdjacent { .. }));
    assert!(errors.iter().all(GameError::is_recoverable));
}
