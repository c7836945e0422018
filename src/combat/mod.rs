pub mod dice;
pub mod resolution;

pub use dice::{DiceSource, ScriptedDice, SeededDice, DIE_FACES};
pub use resolution::{resolve_attack, validate, AttackOrder, AttackOutcome, AttackResult};
