//! Combatant initialization
//!
//! Derived battle stats are computed once per roster member when the roster
//! loads, before any selection happens, so they are already on hand for
//! informational display during team selection. For the rest of the battle
//! `max_health` and `attack_power` are immutable; `health` only moves by
//! resolver-applied deltas.

use machop_protocol::{Combatant, CombatantSeed};

/// Build a live combatant from a roster seed.
///
/// `max_health = hp + defense`, `health = max_health`,
/// `attack_power = attack + speed / 3`.
pub fn combatant_from_seed(seed: CombatantSeed) -> Combatant {
    let max_health = f64::from(seed.pokemon.hp + seed.pokemon.defense);
    let attack_power = f64::from(seed.pokemon.attack) + f64::from(seed.pokemon.speed) / 3.0;

    Combatant {
        id: seed.id,
        pokemon: seed.pokemon,
        image_path: seed.image_path,
        health: max_health,
        max_health,
        attack_power,
    }
}

/// Initialize a whole roster, preserving order
pub fn roster_from_seeds(seeds: Vec<CombatantSeed>) -> Vec<Combatant> {
    seeds.into_iter().map(combatant_from_seed).collect()
}
