//! TechNova War - Entry Point
//!
//! Terminal driver: reads player names and menu choices from stdin, renders
//! the map each turn, and hands every action to the game core.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use technova_war::core::error::Result;
use technova_war::core::{GameConfig, PlayerId, TerritoryId};
use technova_war::game::{EventLog, GameState};
use technova_war::player::Player;

/// TechNova War - conquer territories on a ring map with dice
#[derive(Parser, Debug)]
#[command(name = "technova-war")]
#[command(about = "Turn-based territorial conquest with dice combat")]
struct Args {
    /// TOML game config (territory_count, player_count, starting_troops, seed)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of territories on the ring map
    #[arg(long)]
    territories: Option<u32>,

    /// Number of players
    #[arg(long)]
    players: Option<u32>,

    /// Dice seed for a reproducible game
    #[arg(long)]
    seed: Option<u64>,

    /// Print a JSON summary of the game when it ends
    #[arg(long)]
    json: bool,
}

/// JSON output structure
#[derive(Serialize)]
struct GameSummary<'a> {
    turns: u32,
    winner: Option<&'a str>,
    players: Vec<&'a Player>,
    events: &'a EventLog,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("technova_war=info")),
        )
        .init();

    let args = Args::parse();
    let config = build_config(&args)?;
    config.validate()?;

    let stdin = io::stdin();
    let mut input = stdin.lock();

    println!("=== Player Registration ===");
    let mut names = Vec::new();
    for i in 0..config.player_count {
        match read_line(&mut input, &format!("Name of player {}: ", i))? {
            Some(name) if !name.is_empty() => names.push(name),
            Some(_) => names.push(format!("Player {}", i)),
            None => return Ok(()),
        }
    }

    let mut game = GameState::new(config, &names)?;

    println!("\n=== Missions ===");
    for player in game.players().iter() {
        let mission = game.mission_for(player.id)?;
        println!("{}: {}", player.name, mission.describe());
    }

    println!("\n=== TECHNOVA WAR BEGINS ===");
    run_turn_loop(&mut game, &mut input)?;

    if args.json {
        let summary = GameSummary {
            turns: game.turn(),
            winner: game
                .winner()
                .and_then(|id| game.player(id).ok())
                .map(|p| p.name.as_str()),
            players: game.players().iter().collect(),
            events: game.events(),
        };
        println!("{}", serde_json::to_string_pretty(&summary)?);
    }

    Ok(())
}

fn build_config(args: &Args) -> Result<GameConfig> {
    let mut config = match &args.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };

    if let Some(territories) = args.territories {
        config.territory_count = territories;
    }
    if let Some(players) = args.players {
        config.player_count = players;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }

    Ok(config)
}

fn run_turn_loop(game: &mut GameState, input: &mut impl BufRead) -> Result<()> {
    loop {
        let player_id = game.active_player();
        let name = game.player(player_id)?.name.clone();

        println!("\n--------------------------------------");
        println!("Turn {}: {} (id {})", game.turn(), name, player_id.0);

        display_player(game, player_id)?;
        display_territories(game);

        println!("\nMenu:");
        println!("  1 - Attack");
        println!("  0 - Skip turn");
        println!("  9 - Quit game");

        let Some(choice) = read_number(input, "Choice: ")? else {
            return Ok(());
        };

        match choice {
            9 => {
                println!("Game ended by the players.");
                return Ok(());
            }
            1 => {
                let Some(order) = read_attack(input)? else {
                    return Ok(());
                };
                perform_attack(game, player_id, order);
            }
            _ => println!("Turn skipped."),
        }

        if let Some(winner) = game.end_turn()? {
            println!("\n=====================================");
            println!("{} COMPLETED THE MISSION and wins!", game.player(winner)?.name);
            println!("=====================================");
            return Ok(());
        }
    }
}

fn read_attack(input: &mut impl BufRead) -> Result<Option<(u32, u32, u32)>> {
    let Some(origin) = read_number(input, "Origin territory id: ")? else {
        return Ok(None);
    };
    let Some(target) = read_number(input, "Target territory id: ")? else {
        return Ok(None);
    };
    let Some(troops) = read_number(input, "Troops to commit: ")? else {
        return Ok(None);
    };
    Ok(Some((origin, target, troops)))
}

fn perform_attack(
    game: &mut GameState,
    player: PlayerId,
    (origin, target, troops): (u32, u32, u32),
) {
    let origin = TerritoryId(origin);
    let target = TerritoryId(target);

    match game.attack(player, origin, target, troops) {
        Ok(result) => {
            println!("\n--- Attack ---");
            println!(
                "Dice -> Attack: {} | Defense: {}",
                result.attack_score, result.defense_score
            );
            if result.is_conquest() {
                println!("Territory {} conquered!", target.0);
            } else {
                println!("Attack failed. Committed troops were lost.");
            }
        }
        Err(e) => {
            tracing::warn!("Attack rejected: {}", e);
            println!("Attack rejected: {}", e);
        }
    }
}

fn display_player(game: &GameState, player: PlayerId) -> Result<()> {
    let owner = game.player(player)?;
    println!("\n=== {}'s territories ===", owner.name);
    for territory in game.player_territories(player)? {
        println!(
            "  ID {} - {} | Troops: {}",
            territory.id.0, territory.name, territory.troops
        );
    }
    Ok(())
}

fn display_territories(game: &GameState) {
    println!("\n=== All territories ===");
    for territory in game.list_territories() {
        let owner = territory
            .owner
            .and_then(|id| game.player(id).ok())
            .map_or("neutral", |p| p.name.as_str());
        println!(
            "ID {} - {} | Owner: {} | Troops: {}",
            territory.id.0, territory.name, owner, territory.troops
        );
    }
}

/// Prompt and read one trimmed line; `None` at end of input
fn read_line(input: &mut impl BufRead, prompt: &str) -> Result<Option<String>> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Prompt until a non-negative number is entered; `None` at end of input
fn read_number(input: &mut impl BufRead, prompt: &str) -> Result<Option<u32>> {
    loop {
        let Some(line) = read_line(input, prompt)? else {
            return Ok(None);
        };
        match line.parse::<u32>() {
            Ok(n) => return Ok(Some(n)),
            Err(_) => println!("Please enter a non-negative whole number."),
        }
    }
}
