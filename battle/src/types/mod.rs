//! Domain types layered over the wire format

pub mod combatant;
mod team;

pub use combatant::{combatant_from_seed, roster_from_seeds};
pub use team::Team;
