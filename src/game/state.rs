//! GameState - the main game container
//!
//! Owns the map, the players, their missions, and the dice. The turn loop
//! drives it through `attack`, `check_victory`, and `end_turn`; display code
//! reads it through the snapshot queries.

use crate::combat::{self, AttackOrder, AttackOutcome, AttackResult, DiceSource, SeededDice};
use crate::core::config::GameConfig;
use crate::core::error::{GameError, Result};
use crate::core::types::{PlayerId, TerritoryId, Turn};
use crate::game::events::{EventLog, EventType};
use crate::map::{Territory, TerritoryGraph};
use crate::mission::{self, Mission};
use crate::player::{Player, PlayerRegistry};

#[derive(Debug)]
pub struct GameState<D: DiceSource = SeededDice> {
    config: GameConfig,
    graph: TerritoryGraph,
    players: PlayerRegistry,
    /// One mission per player, indexed by `PlayerId`
    missions: Vec<Mission>,
    dice: D,
    turn: Turn,
    active_player: PlayerId,
    winner: Option<PlayerId>,
    events: EventLog,
}

impl GameState<SeededDice> {
    /// Set up a game with dice seeded from the config (or OS entropy)
    pub fn new(config: GameConfig, names: &[String]) -> Result<Self> {
        let dice = SeededDice::from_optional_seed(config.seed);
        Self::setup(config, names, dice)
    }
}

impl<D: DiceSource> GameState<D> {
    /// Build the map, create and name players, distribute territories
    /// round-robin, and assign missions
    ///
    /// Players without a supplied name keep their default "Player N".
    pub fn setup(config: GameConfig, names: &[String], dice: D) -> Result<Self> {
        config.validate()?;
        if names.len() > config.player_count as usize {
            return Err(GameError::Configuration(format!(
                "{} player names given for {} players",
                names.len(),
                config.player_count
            )));
        }

        let mut graph = TerritoryGraph::build(config.territory_count)?;
        let mut players = PlayerRegistry::create(config.player_count);
        for (i, name) in names.iter().enumerate() {
            players.rename(PlayerId(i as u32), name.as_str())?;
        }

        distribute_territories(&mut graph, &mut players, config.starting_troops)?;
        let missions = mission::assign(&players, &graph);

        let mut events = EventLog::new();
        events.add_event(
            EventType::GameStarted {
                territories: config.territory_count,
                players: config.player_count,
            },
            0,
        );
        for (player, mission) in players.ids().zip(missions.iter()) {
            events.add_event(
                EventType::MissionAssigned {
                    player,
                    mission: *mission,
                },
                0,
            );
        }

        tracing::info!(
            "Game set up: {} territories, {} players, {} troops per territory",
            config.territory_count,
            config.player_count,
            config.starting_troops
        );

        Ok(Self {
            config,
            graph,
            players,
            missions,
            dice,
            turn: 1,
            active_player: PlayerId(0),
            winner: None,
            events,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn graph(&self) -> &TerritoryGraph {
        &self.graph
    }

    pub fn players(&self) -> &PlayerRegistry {
        &self.players
    }

    pub fn player(&self, id: PlayerId) -> Result<&Player> {
        self.players.player(id)
    }

    pub fn mission_for(&self, player: PlayerId) -> Result<&Mission> {
        self.missions
            .get(player.index())
            .ok_or(GameError::UnknownPlayer(player.0))
    }

    pub fn events(&self) -> &EventLog {
        &self.events
    }

    pub fn turn(&self) -> Turn {
        self.turn
    }

    pub fn active_player(&self) -> PlayerId {
        self.active_player
    }

    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    /// Resolve one attack and record it in the event log
    ///
    /// A rejected attack leaves the game untouched and logs nothing.
    pub fn attack(
        &mut self,
        attacker: PlayerId,
        origin: TerritoryId,
        target: TerritoryId,
        troops: u32,
    ) -> Result<AttackResult> {
        let order = AttackOrder {
            attacker,
            origin,
            target,
            troops,
        };
        let result = combat::resolve_attack(
            &mut self.graph,
            &mut self.players,
            &mut self.dice,
            &order,
        )?;

        let event = match result.outcome {
            AttackOutcome::Conquest => EventType::TerritoryConquered {
                attacker,
                origin,
                target,
                previous_owner: result.previous_owner,
                troops,
                attack_score: result.attack_score,
                defense_score: result.defense_score,
            },
            AttackOutcome::Repelled => EventType::AttackRepelled {
                attacker,
                origin,
                target,
                troops,
                attack_score: result.attack_score,
                defense_score: result.defense_score,
            },
        };
        self.events.add_event(event, self.turn);

        debug_assert!(self.is_consistent());
        Ok(result)
    }

    /// Whether `player` has completed their mission
    pub fn check_victory(&self, player: PlayerId) -> Result<bool> {
        let objective = self.mission_for(player)?;
        Ok(mission::evaluate(objective, &self.graph, player))
    }

    /// Close the active player's turn
    ///
    /// If the active player has completed their mission they are recorded as
    /// the winner and returned, and the turn does not advance. Otherwise play
    /// passes to the next player.
    pub fn end_turn(&mut self) -> Result<Option<PlayerId>> {
        let player = self.active_player;

        if self.check_victory(player)? {
            if self.winner.is_none() {
                self.winner = Some(player);
                self.events
                    .add_event(EventType::MissionCompleted { player }, self.turn);
                tracing::info!("{} completed their mission", self.players.player(player)?.name);
            }
            return Ok(Some(player));
        }

        self.events.add_event(EventType::TurnEnded { player }, self.turn);
        self.active_player = PlayerId((player.0 + 1) % self.players.len() as u32);
        self.turn += 1;
        Ok(None)
    }

    /// Snapshot of every territory, in id order
    pub fn list_territories(&self) -> Vec<Territory> {
        self.graph.iter().cloned().collect()
    }

    /// Snapshot of the territories `player` owns, in id order
    pub fn player_territories(&self, player: PlayerId) -> Result<Vec<Territory>> {
        self.players.player(player)?;
        Ok(self.graph.territories_of(player).cloned().collect())
    }

    /// Every cached territory count matches the map, and the counts add up
    /// to the number of owned territories
    pub fn is_consistent(&self) -> bool {
        let owned = self.graph.iter().filter(|t| t.owner.is_some()).count() as u32;
        self.players
            .iter()
            .all(|p| p.territory_count == self.graph.ownership_count(p.id))
            && self.players.total_territory_count() == owned
    }
}

/// Hand out territories round-robin: territory `i` goes to player `i % P`
fn distribute_territories(
    graph: &mut TerritoryGraph,
    players: &mut PlayerRegistry,
    starting_troops: u32,
) -> Result<()> {
    let player_count = players.len() as u32;
    if player_count == 0 {
        return Err(GameError::Configuration("no players to distribute territories to".into()));
    }

    for i in 0..graph.len() as u32 {
        let territory = TerritoryId(i);
        let owner = PlayerId(i % player_count);
        graph.set_owner(territory, Some(owner))?;
        graph.set_troops(territory, starting_troops)?;
        players.increment_territory_count(owner)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::ScriptedDice;

    fn scripted_game(territories: u32, players: u32, rolls: Vec<u32>) -> GameState<ScriptedDice> {
        let config = GameConfig::with_counts(territories, players);
        GameState::setup(config, &[], ScriptedDice::new(rolls).unwrap()).unwrap()
    }

    #[test]
    fn test_setup_round_robin_distribution() {
        let game = scripted_game(6, 2, vec![1]);

        let ids = |p: u32| -> Vec<u32> {
            game.player_territories(PlayerId(p))
                .unwrap()
                .iter()
                .map(|t| t.id.0)
                .collect()
        };
        assert_eq!(ids(0), vec![0, 2, 4]);
        assert_eq!(ids(1), vec![1, 3, 5]);
        assert!(game.list_territories().iter().all(|t| t.troops == 3));
        assert_eq!(game.player(PlayerId(0)).unwrap().territory_count, 3);
        assert!(game.is_consistent());
    }

    #[test]
    fn test_setup_assigns_missions() {
        let game = scripted_game(6, 2, vec![1]);
        for p in 0..2 {
            assert_eq!(
                *game.mission_for(PlayerId(p)).unwrap(),
                Mission::ConquerTerritories { target: 4 }
            );
            assert!(!game.check_victory(PlayerId(p)).unwrap());
        }
        // GameStarted plus one MissionAssigned per player
        assert_eq!(game.events().len(), 3);
    }

    #[test]
    fn test_setup_applies_names() {
        let config = GameConfig::with_counts(6, 3);
        let names = vec!["Ada".to_string(), "Grace".to_string()];
        let game = GameState::setup(config, &names, ScriptedDice::new(vec![1]).unwrap()).unwrap();
        assert_eq!(game.player(PlayerId(0)).unwrap().name, "Ada");
        assert_eq!(game.player(PlayerId(1)).unwrap().name, "Grace");
        assert_eq!(game.player(PlayerId(2)).unwrap().name, "Player 2");
    }

    #[test]
    fn test_setup_rejects_too_many_names() {
        let config = GameConfig::with_counts(6, 1);
        let names = vec!["Ada".to_string(), "Grace".to_string()];
        let result = GameState::setup(config, &names, ScriptedDice::new(vec![1]).unwrap());
        assert!(matches!(result, Err(GameError::Configuration(_))));
    }

    #[test]
    fn test_setup_with_more_players_than_territories() {
        let game = scripted_game(3, 5, vec![1]);
        assert_eq!(game.player(PlayerId(4)).unwrap().territory_count, 0);
        assert_eq!(game.mission_for(PlayerId(4)).unwrap().target(), 1);
        // Players 0..3 already own one territory each, which meets a target of 1
        assert!(game.check_victory(PlayerId(0)).unwrap());
        assert!(!game.check_victory(PlayerId(3)).unwrap());
    }

    #[test]
    fn test_attack_records_event() {
        let mut game = scripted_game(6, 2, vec![6, 6, 1, 1, 1]);
        let result = game.attack(PlayerId(0), TerritoryId(0), TerritoryId(1), 2).unwrap();
        assert!(result.is_conquest());
        assert_eq!(game.events().conquest_count(), 1);
        assert!(game.is_consistent());
    }

    #[test]
    fn test_rejected_attack_logs_nothing() {
        let mut game = scripted_game(6, 2, vec![6]);
        let before = game.events().len();
        assert!(game.attack(PlayerId(1), TerritoryId(0), TerritoryId(1), 1).is_err());
        assert_eq!(game.events().len(), before);
    }

    #[test]
    fn test_end_turn_rotates_players() {
        let mut game = scripted_game(6, 3, vec![1]);
        assert_eq!(game.active_player(), PlayerId(0));
        assert_eq!(game.end_turn().unwrap(), None);
        assert_eq!(game.active_player(), PlayerId(1));
        assert_eq!(game.end_turn().unwrap(), None);
        assert_eq!(game.end_turn().unwrap(), None);
        assert_eq!(game.active_player(), PlayerId(0));
        assert_eq!(game.turn(), 4);
    }

    #[test]
    fn test_end_turn_declares_winner() {
        // Player 0 owns 0, 2, 4 with target 4; one conquest wins
        let mut game = scripted_game(6, 2, vec![6, 6, 1, 1, 1]);
        game.attack(PlayerId(0), TerritoryId(0), TerritoryId(1), 2).unwrap();

        assert_eq!(game.end_turn().unwrap(), Some(PlayerId(0)));
        assert_eq!(game.winner(), Some(PlayerId(0)));
        assert_eq!(game.active_player(), PlayerId(0));
    }

    #[test]
    fn test_unknown_player_queries() {
        let game = scripted_game(6, 2, vec![1]);
        assert!(matches!(game.check_victory(PlayerId(2)), Err(GameError::UnknownPlayer(2))));
        assert!(matches!(game.player_territories(PlayerId(9)), Err(GameError::UnknownPlayer(9))));
    }
}
