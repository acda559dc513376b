//! The battle state machine

use std::time::Instant;

use machop_protocol::{Combatant, Winner};
use thiserror::Error;

use super::popup::GameOverPopup;
use crate::log::BattleLog;
use crate::selection::{Selection, SelectionError, TEAM_SIZE, Toggle};
use crate::types::Team;

/// Lifecycle phase of a battle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No roster on hand
    Idle,
    /// Roster loaded, user picking a team
    Selecting,
    /// Battle running, turns may be resolved
    Active,
    /// Winner decided, no further turns
    Terminal,
}

/// A lifecycle transition the machine refuses
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StateError {
    #[error("a battle is still in progress")]
    BattleInProgress,

    #[error("a turn resolution is still in flight")]
    TurnInFlight,
}

/// One battle from roster load to game over.
///
/// Every piece of battle state lives in this value: the rosters, the
/// provisional selection, both teams, the turn counter, the narration log
/// and the game-over popup schedule. Turn outcomes are computed by the
/// external resolver; the machine hands out a snapshot
/// ([`begin_turn`](Battle::begin_turn)) and adopts the answer verbatim
/// ([`apply_turn`](Battle::apply_turn)).
#[derive(Debug, Clone)]
pub struct Battle {
    pub(super) phase: Phase,

    /// Candidates offered to the user, initialized stats included
    pub(super) roster: Vec<Combatant>,

    /// The CPU's full team-to-be, not subject to selection
    pub(super) cpu_roster: Vec<Combatant>,

    pub(super) selection: Selection,
    pub(super) user_team: Team,
    pub(super) cpu_team: Team,
    pub(super) turn: u32,
    pub(super) log: BattleLog,
    pub(super) winner: Option<Winner>,

    /// Single-flight guard: set between `begin_turn` and
    /// `apply_turn`/`abort_turn`
    pub(super) turn_pending: bool,

    pub(super) popup: GameOverPopup,
}

impl Battle {
    pub fn new() -> Self {
        Self {
            phase: Phase::Idle,
            roster: Vec::new(),
            cpu_roster: Vec::new(),
            selection: Selection::new(),
            user_team: Team::default(),
            cpu_team: Team::default(),
            turn: 1,
            log: BattleLog::new(),
            winner: None,
            turn_pending: false,
            popup: GameOverPopup::hidden(),
        }
    }

    // === Queries ===

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Current turn number; starts at 1 and only moves by adopted responses
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Fixed once the battle reaches [`Phase::Terminal`]
    pub fn winner(&self) -> Option<Winner> {
        self.winner
    }

    /// Narration so far, oldest first
    pub fn log(&self) -> &[String] {
        self.log.entries()
    }

    pub fn roster(&self) -> &[Combatant] {
        &self.roster
    }

    pub fn cpu_roster(&self) -> &[Combatant] {
        &self.cpu_roster
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn user_team(&self) -> &Team {
        &self.user_team
    }

    pub fn cpu_team(&self) -> &Team {
        &self.cpu_team
    }

    /// A resolver round trip is outstanding
    pub fn turn_in_flight(&self) -> bool {
        self.turn_pending
    }

    // === Transitions ===

    /// Install a freshly fetched (and initialized) roster and open team
    /// selection.
    ///
    /// Valid from `Idle` (first load), `Selecting` (reload) and `Terminal`
    /// ("play again"). All derived state (selection, teams, turn counter,
    /// log, winner, popup schedule) is reset to its initial value.
    pub fn load_roster(
        &mut self,
        user: Vec<Combatant>,
        cpu: Vec<Combatant>,
    ) -> Result<(), StateError> {
        if self.phase == Phase::Active {
            return Err(StateError::BattleInProgress);
        }
        if self.turn_pending {
            return Err(StateError::TurnInFlight);
        }

        *self = Self {
            phase: Phase::Selecting,
            roster: user,
            cpu_roster: cpu,
            ..Self::new()
        };
        Ok(())
    }

    /// Pick or unpick a roster member for the team
    pub fn toggle_pick(&mut self, id: &str) -> Result<Toggle, SelectionError> {
        if self.phase != Phase::Selecting {
            return Err(SelectionError::Closed);
        }
        if !self.roster.iter().any(|c| c.id == id) {
            return Err(SelectionError::UnknownCombatant(id.to_string()));
        }
        self.selection.toggle(id)
    }

    /// Turn a complete selection into the user team and start the battle.
    ///
    /// Pick order becomes team order; the CPU team is the full fetched CPU
    /// roster. The roster itself is untouched.
    pub fn confirm_team(&mut self) -> Result<(), SelectionError> {
        if self.phase != Phase::Selecting {
            return Err(SelectionError::Closed);
        }
        if !self.selection.is_complete() {
            return Err(SelectionError::Incomplete(self.selection.len()));
        }

        let mut members = Vec::with_capacity(TEAM_SIZE);
        for id in self.selection.picks() {
            match self.roster.iter().find(|c| &c.id == id) {
                Some(combatant) => members.push(combatant.clone()),
                None => return Err(SelectionError::UnknownCombatant(id.clone())),
            }
        }

        self.user_team = Team::new(members);
        self.cpu_team = Team::new(self.cpu_roster.clone());
        self.turn = 1;
        self.log = BattleLog::new();
        self.winner = None;
        self.phase = Phase::Active;
        Ok(())
    }

    /// Navigate away: destroy all battle state, popup schedule included
    pub fn leave(&mut self) {
        *self = Self::new();
    }

    // === Game-over popup ===

    /// Hide the terminal popup and arm its re-show timer
    pub fn dismiss_game_over(&mut self, now: Instant) {
        if self.phase == Phase::Terminal {
            self.popup.dismiss(now);
        }
    }

    /// Fire the re-show timer if due; returns current visibility
    pub fn poll_popup(&mut self, now: Instant) -> bool {
        self.popup.poll(now)
    }

    /// Current popup state (visibility and armed re-show deadline)
    pub fn popup(&self) -> &GameOverPopup {
        &self.popup
    }
}

impl Default for Battle {
    fn default() -> Self {
        Self::new()
    }
}
