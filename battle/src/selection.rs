//! Team selection
//!
//! The provisional record of picks during the `Selecting` phase. Only
//! [`Battle::confirm_team`](crate::Battle::confirm_team) turns a complete
//! selection into a team; the roster itself is never touched.

use thiserror::Error;

/// Number of members a battle team holds
pub const TEAM_SIZE: usize = 3;

/// A selection action the user has to correct
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    /// A fourth pick; nothing changes until something is unpicked
    #[error("selection already holds 3 members")]
    Full,

    /// Confirmation attempted without a full team
    #[error("a team needs exactly 3 members, {0} selected")]
    Incomplete(usize),

    /// The id does not belong to the offered roster
    #[error("unknown combatant id: {0}")]
    UnknownCombatant(String),

    /// Selection actions are only valid during the `Selecting` phase
    #[error("team selection is not open")]
    Closed,
}

/// What a toggle did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    Picked,
    Unpicked,
}

/// Provisional team picks, capped at [`TEAM_SIZE`].
///
/// Pick order is kept: on confirmation it becomes team order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    picks: Vec<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Picked ids in pick order
    pub fn picks(&self) -> &[String] {
        &self.picks
    }

    pub fn len(&self) -> usize {
        self.picks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.picks.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.picks.iter().any(|p| p == id)
    }

    /// Exactly [`TEAM_SIZE`] picks, ready for confirmation
    pub fn is_complete(&self) -> bool {
        self.picks.len() == TEAM_SIZE
    }

    /// Pick `id`, or drop it if already picked.
    ///
    /// A pick beyond [`TEAM_SIZE`] is rejected with no state change.
    pub fn toggle(&mut self, id: &str) -> Result<Toggle, SelectionError> {
        if let Some(pos) = self.picks.iter().position(|p| p == id) {
            self.picks.remove(pos);
            Ok(Toggle::Unpicked)
        } else if self.picks.len() < TEAM_SIZE {
            self.picks.push(id.to_string());
            Ok(Toggle::Picked)
        } else {
            Err(SelectionError::Full)
        }
    }
}
