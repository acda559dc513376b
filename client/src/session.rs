//! Battle session: a resolver driving the state machine
//!
//! [`BattleSession`] maps the discrete user actions (pick, confirm,
//! advance turn, play again, dismiss, leave) onto the `machop-battle`
//! machine, with the resolver on the other side of every turn. Exactly one
//! resolver round trip is in flight at a time; the session borrows itself
//! mutably for the whole exchange and the machine's single-flight guard
//! backs that up.

use std::time::{Duration, Instant};

use machop_battle::{
    Battle, Phase, RESHOW_DELAY, SelectionError, StateError, Toggle, TurnError, TurnReport,
    roster_from_seeds,
};
use thiserror::Error;

use crate::error::ClientError;
use crate::resolver::Resolver;

/// A session action that failed
#[derive(Error, Debug)]
pub enum SessionError {
    /// The game service was unreachable or rejected the request; battle
    /// state is unchanged and the action may be retried
    #[error(transparent)]
    Service(#[from] ClientError),

    #[error(transparent)]
    Turn(#[from] TurnError),

    #[error(transparent)]
    State(#[from] StateError),

    /// "Play again" is only offered on the game-over screen
    #[error("no finished battle to replay")]
    NotFinished,
}

/// One user's battle, from roster fetch to the game-over cycle
pub struct BattleSession<R> {
    resolver: R,
    battle: Battle,
}

impl<R: Resolver> BattleSession<R> {
    pub fn new(resolver: R) -> Self {
        Self {
            resolver,
            battle: Battle::new(),
        }
    }

    /// Read-only view of the battle state
    pub fn battle(&self) -> &Battle {
        &self.battle
    }

    /// Fetch a fresh roster, initialize derived stats for both sides and
    /// open team selection.
    pub async fn load_roster(&mut self) -> Result<(), SessionError> {
        if self.battle.phase() == Phase::Active {
            return Err(StateError::BattleInProgress.into());
        }

        let bundle = self.resolver.start_battle().await?;
        let user = roster_from_seeds(bundle.user_pokemon);
        let cpu = roster_from_seeds(bundle.cpu_pokemon);
        tracing::info!(
            candidates = user.len(),
            cpu = cpu.len(),
            "roster loaded"
        );
        self.battle.load_roster(user, cpu)?;
        Ok(())
    }

    /// Pick or unpick a candidate while selecting
    pub fn toggle_pick(&mut self, id: &str) -> Result<Toggle, SelectionError> {
        self.battle.toggle_pick(id)
    }

    /// Confirm the three picks and start the battle
    pub fn confirm_team(&mut self) -> Result<(), SelectionError> {
        self.battle.confirm_team()?;
        tracing::info!(team = self.battle.user_team().len(), "battle started");
        Ok(())
    }

    /// Resolve one turn: send the authoritative snapshot, adopt the answer.
    ///
    /// On any failure the battle state is untouched and the same turn can be
    /// retried by calling this again.
    pub async fn advance_turn(&mut self) -> Result<TurnReport, SessionError> {
        let request = self.battle.begin_turn()?;
        let response = match self.resolver.resolve_turn(request).await {
            Ok(response) => response,
            Err(error) => {
                self.battle.abort_turn();
                return Err(error.into());
            }
        };

        let report = self.battle.apply_turn(response)?;
        match report.winner {
            Some(winner) => {
                tracing::info!(winner = winner.as_str(), turn = report.turn, "battle over");
            }
            None => tracing::debug!(turn = report.turn, "turn resolved"),
        }
        Ok(report)
    }

    /// "Play again": from the game-over screen, fetch a fresh roster and
    /// reset everything, the popup timer included.
    pub async fn play_again(&mut self) -> Result<(), SessionError> {
        if self.battle.phase() != Phase::Terminal {
            return Err(SessionError::NotFinished);
        }
        self.load_roster().await
    }

    /// Dismiss the game-over popup to read the log underneath.
    ///
    /// Returns the delay after which the popup re-shows, if it was visible.
    pub fn dismiss_game_over(&mut self) -> Option<Duration> {
        if !self.battle.popup().is_visible() {
            return None;
        }
        self.battle.dismiss_game_over(Instant::now());
        Some(RESHOW_DELAY)
    }

    /// Popup visibility, firing the re-show timer if it is due
    pub fn game_over_visible(&mut self) -> bool {
        self.battle.poll_popup(Instant::now())
    }

    /// Navigate away: all battle state is destroyed
    pub fn leave(&mut self) {
        self.battle.leave();
    }
}
