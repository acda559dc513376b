//! The selection → battle → game-over lifecycle

mod battle;
mod popup;
mod turns;

pub use battle::{Battle, Phase, StateError};
pub use popup::{GameOverPopup, RESHOW_DELAY};
pub use turns::{TurnError, TurnReport};
