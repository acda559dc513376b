//! Async client for the battle mini-game.
//!
//! Wraps the two-endpoint HTTP contract of the battle-compute service and
//! drives the `machop-battle` state machine: [`GameClient`] speaks the wire
//! format, the [`Resolver`] trait keeps turn computation an opaque external
//! capability, and [`BattleSession`] maps the discrete user actions onto the
//! machine.

mod api;
mod error;
mod resolver;
mod session;

pub use api::{DEFAULT_BASE_URL, GameClient};
pub use error::ClientError;
pub use resolver::Resolver;
pub use session::{BattleSession, SessionError};

pub use machop_battle::{
    Battle, BattleLog, Phase, RESHOW_DELAY, Selection, SelectionError, TEAM_SIZE, Team, Toggle,
    TurnError, TurnReport, Winner,
};
pub use machop_protocol::{
    Combatant, CombatantSeed, RosterBundle, Species, TurnRequest, TurnResponse,
};
