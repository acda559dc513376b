//! Game-over popup scheduling
//!
//! The popup appears when a battle reaches its terminal phase. Dismissing it
//! (to read the battle log underneath) arms a one-shot timer that re-shows
//! it after [`RESHOW_DELAY`]. The timer belongs to the battle: any
//! transition out of the terminal phase cancels it, so a stale deadline can
//! never fire against a new or absent battle.
//!
//! Time is passed in by the caller, which keeps the schedule deterministic
//! under test.

use std::time::{Duration, Instant};

/// Delay before a dismissed popup reappears
pub const RESHOW_DELAY: Duration = Duration::from_secs(30);

/// Visibility state of the game-over popup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOverPopup {
    visible: bool,
    reshow_at: Option<Instant>,
}

impl GameOverPopup {
    pub(crate) fn hidden() -> Self {
        Self {
            visible: false,
            reshow_at: None,
        }
    }

    pub(crate) fn shown() -> Self {
        Self {
            visible: true,
            reshow_at: None,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Deadline of the armed re-show timer, if any
    pub fn reshow_at(&self) -> Option<Instant> {
        self.reshow_at
    }

    /// Hide the popup and arm the re-show timer. No effect while hidden.
    pub(crate) fn dismiss(&mut self, now: Instant) {
        if self.visible {
            self.visible = false;
            self.reshow_at = Some(now + RESHOW_DELAY);
        }
    }

    /// Fire the timer if its deadline has passed; returns visibility
    pub(crate) fn poll(&mut self, now: Instant) -> bool {
        if let Some(deadline) = self.reshow_at
            && now >= deadline
        {
            self.visible = true;
            self.reshow_at = None;
        }
        self.visible
    }

    pub(crate) fn cancel(&mut self) {
        *self = Self::hidden();
    }
}
