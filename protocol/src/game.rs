//! Roster types for `GET /api/game/start`
//!
//! Field names mirror the service's JSON exactly, mixed casing included
//! (`pokemonId` next to `capture_rate`).

use serde::{Deserialize, Serialize};

/// Immutable species record carried by every roster seed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Species {
    #[serde(rename = "pokemonId")]
    pub pokemon_id: u32,

    pub name: String,

    // Base stats the derived battle stats are computed from
    pub hp: u32,
    pub attack: u32,
    pub defense: u32,
    pub speed: u32,

    /// Height in meters
    pub height: f64,

    /// Weight in kilograms
    pub weight: f64,

    pub capture_rate: u32,

    pub primary_type: String,

    #[serde(default)]
    pub secondary_type: Option<String>,

    /// Not sent by the game endpoints, so absent means false
    #[serde(default)]
    pub legendary: bool,
}

/// One roster entry as served by `GET /api/game/start`
///
/// A seed carries no battle state; derived stats are initialized client-side
/// when the roster is loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombatantSeed {
    /// Stable identifier for the battle's lifetime
    #[serde(rename = "_id")]
    pub id: String,

    pub pokemon: Species,

    #[serde(default)]
    pub image_path: Option<String>,
}

/// Response body of `GET /api/game/start`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterBundle {
    /// Candidates offered to the user (the service sends 7)
    pub user_pokemon: Vec<CombatantSeed>,

    /// The CPU's full team (the service sends 3, not subject to selection)
    pub cpu_pokemon: Vec<CombatantSeed>,
}
