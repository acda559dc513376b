//! Turn resolution types for `POST /api/game/turn`
//!
//! The request carries the client's authoritative snapshot of both teams;
//! the response is the new authoritative state and is adopted verbatim after
//! [`TurnResponse::validate`].

use serde::{Deserialize, Serialize};

use crate::game::Species;
use crate::ResponseError;

/// A combatant as it travels on the wire: a roster seed plus the
/// battle-derived stats.
///
/// `health` is the only field the resolver mutates; `maxHealth` and
/// `attackPower` are fixed for the battle. A fainted combatant keeps riding
/// along in its team for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Combatant {
    #[serde(rename = "_id")]
    pub id: String,

    pub pokemon: Species,

    #[serde(default)]
    pub image_path: Option<String>,

    pub health: f64,

    #[serde(rename = "maxHealth")]
    pub max_health: f64,

    #[serde(rename = "attackPower")]
    pub attack_power: f64,
}

impl Combatant {
    /// Display name, straight from the species record
    pub fn name(&self) -> &str {
        &self.pokemon.name
    }

    /// A combatant at or below zero health is out of the battle
    pub fn is_fainted(&self) -> bool {
        self.health <= 0.0
    }

    /// Remaining health as a percentage, clamped to 0..=100 for display
    pub fn health_percent(&self) -> f64 {
        if self.max_health <= 0.0 {
            return 0.0;
        }
        (self.health / self.max_health * 100.0).clamp(0.0, 100.0)
    }
}

/// Request body of `POST /api/game/turn`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TurnRequest {
    pub user_team: Vec<Combatant>,
    pub cpu_team: Vec<Combatant>,
    pub current_turn: u32,
}

/// Response body of `POST /api/game/turn`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TurnResponse {
    pub user_team: Vec<Combatant>,
    pub cpu_team: Vec<Combatant>,
    pub current_turn: u32,

    /// Narration for this turn, appended to the battle log in order
    pub battle_log: Vec<String>,

    pub game_over: bool,

    /// Present exactly when `game_over` is set
    #[serde(default)]
    pub winner: Option<Winner>,
}

impl TurnResponse {
    /// Check the response against the resolution contract.
    ///
    /// `sent_turn` and the team sizes describe the request this response
    /// answers. Terminal responses may echo the turn counter unchanged (the
    /// service ends sudden-death battles without advancing it); everything
    /// else must advance strictly.
    pub fn validate(
        &self,
        sent_turn: u32,
        user_len: usize,
        cpu_len: usize,
    ) -> Result<(), ResponseError> {
        if self.current_turn < sent_turn {
            return Err(ResponseError::TurnRewound {
                sent: sent_turn,
                received: self.current_turn,
            });
        }
        if !self.game_over && self.current_turn == sent_turn {
            return Err(ResponseError::TurnNotAdvanced {
                sent: sent_turn,
                received: self.current_turn,
            });
        }
        if self.game_over && self.winner.is_none() {
            return Err(ResponseError::MissingWinner);
        }
        if self.user_team.len() != user_len {
            return Err(ResponseError::TeamResized {
                side: "user",
                sent: user_len,
                received: self.user_team.len(),
            });
        }
        if self.cpu_team.len() != cpu_len {
            return Err(ResponseError::TeamResized {
                side: "cpu",
                sent: cpu_len,
                received: self.cpu_team.len(),
            });
        }
        Ok(())
    }
}

/// Outcome of a finished battle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Winner {
    User,
    #[serde(rename = "CPU")]
    Cpu,
    Draw,
}

impl Winner {
    pub fn as_str(&self) -> &'static str {
        match self {
            Winner::User => "User",
            Winner::Cpu => "CPU",
            Winner::Draw => "Draw",
        }
    }
}
