//! Battle state machine and domain types for the battle mini-game.
//!
//! This crate is pure and synchronous: it owns every piece of battle state
//! and adopts turn outcomes computed by the external battle-compute service,
//! but performs no combat math and no I/O of its own.
//!
//! # Overview
//!
//! `machop-battle` sits between `machop-protocol` (wire format) and the
//! client layer:
//!
//! ```text
//! machop-protocol (wire format)
//!        │
//!        ▼
//! machop-battle (domain types + state machine) ← THIS CRATE
//!        │
//!        └─> machop-client (HTTP resolver + session driving the machine)
//! ```
//!
//! # Main Types
//!
//! - [`Battle`] - the `Idle -> Selecting -> Active -> Terminal` lifecycle
//! - [`Selection`] - the pick-exactly-three rule over the roster
//! - [`Team`] - one side's ordered members
//! - [`BattleLog`] - append-only narration for one battle
//! - [`GameOverPopup`] - dismiss and timed re-show of the terminal popup
//!
//! # Example Usage
//!
//! ```ignore
//! use machop_battle::{Battle, roster_from_seeds};
//!
//! let mut battle = Battle::new();
//! battle.load_roster(
//!     roster_from_seeds(bundle.user_pokemon),
//!     roster_from_seeds(bundle.cpu_pokemon),
//! )?;
//!
//! battle.toggle_pick("u1")?;
//! battle.toggle_pick("u2")?;
//! battle.toggle_pick("u3")?;
//! battle.confirm_team()?;
//!
//! // One round trip with the resolver per turn
//! let request = battle.begin_turn()?;
//! let report = battle.apply_turn(response)?;
//! if let Some(winner) = report.winner {
//!     println!("{} wins", winner.as_str());
//! }
//! ```

pub mod log;
pub mod machine;
pub mod selection;
pub mod types;

// Re-export main types at crate root for convenience
pub use log::BattleLog;
pub use machine::{Battle, GameOverPopup, Phase, RESHOW_DELAY, StateError, TurnError, TurnReport};
pub use selection::{Selection, SelectionError, TEAM_SIZE, Toggle};
pub use types::{Team, combatant_from_seed, roster_from_seeds};

// Re-export commonly used protocol types
pub use machop_protocol::{
    Combatant, CombatantSeed, RosterBundle, Species, TurnRequest, TurnResponse, Winner,
};
