//! Turn resolution: snapshot out, authoritative response in
//!
//! The resolver is an external compute boundary. `begin_turn` hands it the
//! current snapshot, `apply_turn` adopts its answer verbatim once it passes
//! contract validation, and `abort_turn` drops an in-flight round trip after
//! a transport failure. No combat math happens on this side.

use machop_protocol::{ResponseError, TurnRequest, TurnResponse, Winner};
use thiserror::Error;

use super::battle::{Battle, Phase};
use super::popup::GameOverPopup;
use crate::types::Team;

/// A turn action the machine refuses
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TurnError {
    /// Turns are only resolved while the battle is active
    #[error("no battle is active")]
    NotActive,

    /// Single-flight guard: one resolver round trip at a time
    #[error("a turn request is already in flight")]
    AlreadyResolving,

    /// `apply_turn` without a matching `begin_turn`
    #[error("no turn request is awaiting a response")]
    NotResolving,

    /// The response broke the contract; state is unchanged and retryable
    #[error(transparent)]
    Rejected(#[from] ResponseError),
}

/// What an adopted turn response changed
#[derive(Debug, Clone, PartialEq)]
pub struct TurnReport {
    /// Turn counter after adoption
    pub turn: u32,

    /// Narration entries appended by this turn
    pub entries: Vec<String>,

    /// Set when this turn ended the battle
    pub winner: Option<Winner>,
}

impl TurnReport {
    pub fn is_terminal(&self) -> bool {
        self.winner.is_some()
    }
}

impl Battle {
    /// Snapshot the current state for the resolver and latch the
    /// single-flight guard.
    ///
    /// [`apply_turn`](Battle::apply_turn) or
    /// [`abort_turn`](Battle::abort_turn) must follow before another turn
    /// may begin.
    pub fn begin_turn(&mut self) -> Result<TurnRequest, TurnError> {
        if self.phase != Phase::Active {
            return Err(TurnError::NotActive);
        }
        if self.turn_pending {
            return Err(TurnError::AlreadyResolving);
        }

        self.turn_pending = true;
        Ok(TurnRequest {
            user_team: self.user_team.members.clone(),
            cpu_team: self.cpu_team.members.clone(),
            current_turn: self.turn,
        })
    }

    /// Adopt a resolver response as the new authoritative state.
    ///
    /// A response that violates the contract is rejected and the battle is
    /// left exactly as it was, ready for a retry of the same turn. The first
    /// terminal response fixes the winner and moves the battle to
    /// [`Phase::Terminal`]; the popup appears at that moment.
    pub fn apply_turn(&mut self, response: TurnResponse) -> Result<TurnReport, TurnError> {
        if !self.turn_pending {
            return Err(TurnError::NotResolving);
        }
        self.turn_pending = false;

        response.validate(self.turn, self.user_team.len(), self.cpu_team.len())?;

        let TurnResponse {
            user_team,
            cpu_team,
            current_turn,
            battle_log,
            game_over,
            winner,
        } = response;

        self.user_team = Team::new(user_team);
        self.cpu_team = Team::new(cpu_team);
        self.turn = current_turn;
        self.log.append(battle_log.iter().cloned());

        let winner = if game_over { winner } else { None };
        if game_over {
            self.phase = Phase::Terminal;
            self.winner = winner;
            self.popup = GameOverPopup::shown();
        }

        Ok(TurnReport {
            turn: current_turn,
            entries: battle_log,
            winner,
        })
    }

    /// Drop the in-flight round trip after a transport failure.
    ///
    /// State is untouched; the same turn may be requested again.
    pub fn abort_turn(&mut self) {
        self.turn_pending = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::machine::popup::RESHOW_DELAY;
    use crate::selection::SelectionError;
    use crate::types::combatant_from_seed;
    use machop_protocol::{Combatant, CombatantSeed};
    use std::time::{Duration, Instant};

    fn combatant(id: &str) -> Combatant {
        let seed: CombatantSeed = serde_json::from_value(serde_json::json!({
            "_id": id,
            "pokemon": {
                "pokemonId": 1,
                "name": "Bulbasaur",
                "hp": 45, "attack": 49, "defense": 49, "speed": 45,
                "height": 0.7, "weight": 6.9, "capture_rate": 45,
                "primary_type": "Grass", "secondary_type": "Poison"
            },
            "image_path": null
        }))
        .unwrap();
        combatant_from_seed(seed)
    }

    /// A battle mid-fight: user team [u1, u2, u3], CPU team [c1, c2, c3]
    fn active() -> Battle {
        let mut battle = Battle::new();
        battle
            .load_roster(
                ["u1", "u2", "u3", "u4"].map(combatant).to_vec(),
                ["c1", "c2", "c3"].map(combatant).to_vec(),
            )
            .unwrap();
        for id in ["u1", "u2", "u3"] {
            battle.toggle_pick(id).unwrap();
        }
        battle.confirm_team().unwrap();
        battle
    }

    /// Echo the request's teams with `damage` shaved off every member
    fn response_for(request: &TurnRequest, damage: f64, log: &[&str]) -> TurnResponse {
        let hit = |team: &[Combatant]| {
            team.iter()
                .cloned()
                .map(|mut c| {
                    c.health = (c.health - damage).max(0.0);
                    c
                })
                .collect::<Vec<_>>()
        };
        TurnResponse {
            user_team: hit(&request.user_team),
            cpu_team: hit(&request.cpu_team),
            current_turn: request.current_turn + 1,
            battle_log: log.iter().map(|s| s.to_string()).collect(),
            game_over: false,
            winner: None,
        }
    }

    #[test]
    fn test_turn_flow_stays_active() {
        let mut battle = active();

        let request = battle.begin_turn().unwrap();
        assert_eq!(request.current_turn, 1);
        assert_eq!(request.user_team.len(), 3);
        assert!(battle.turn_in_flight());

        let report = battle
            .apply_turn(response_for(&request, 10.0, &["turn one"]))
            .unwrap();

        assert_eq!(report.turn, 2);
        assert!(!report.is_terminal());
        assert_eq!(battle.phase(), Phase::Active);
        assert_eq!(battle.turn(), 2);
        assert!(!battle.turn_in_flight());
        // Damage was adopted from the response, not computed locally
        assert_eq!(battle.user_team().members[0].health, 84.0);
    }

    #[test]
    fn test_log_concatenates_across_turns() {
        let mut battle = active();

        let request = battle.begin_turn().unwrap();
        battle
            .apply_turn(response_for(&request, 5.0, &["a", "b"]))
            .unwrap();

        let request = battle.begin_turn().unwrap();
        battle
            .apply_turn(response_for(&request, 5.0, &["c"]))
            .unwrap();

        assert_eq!(battle.log(), ["a", "b", "c"]);
    }

    #[test]
    fn test_begin_turn_guards() {
        let mut battle = Battle::new();
        assert_eq!(battle.begin_turn(), Err(TurnError::NotActive));

        let mut battle = active();
        battle.begin_turn().unwrap();
        assert_eq!(battle.begin_turn(), Err(TurnError::AlreadyResolving));
    }

    #[test]
    fn test_apply_without_begin_is_rejected() {
        let mut battle = active();
        let mut probe = battle.clone();
        let request = probe.begin_turn().unwrap();

        let result = battle.apply_turn(response_for(&request, 1.0, &[]));
        assert_eq!(result, Err(TurnError::NotResolving));
    }

    #[test]
    fn test_abort_preserves_state_for_retry() {
        let mut battle = active();
        let before = battle.user_team().clone();

        let request = battle.begin_turn().unwrap();
        battle.abort_turn();

        assert!(!battle.turn_in_flight());
        assert_eq!(battle.turn(), 1);
        assert_eq!(battle.user_team(), &before);

        // Retrying sends the same last-known-good snapshot
        let retry = battle.begin_turn().unwrap();
        assert_eq!(retry, request);
    }

    #[test]
    fn test_contract_violation_leaves_state_unchanged() {
        let mut battle = active();
        let request = battle.begin_turn().unwrap();

        // Non-terminal response that fails to advance the counter
        let mut stalled = response_for(&request, 25.0, &["bad"]);
        stalled.current_turn = request.current_turn;

        let result = battle.apply_turn(stalled);
        assert!(matches!(result, Err(TurnError::Rejected(_))));

        assert_eq!(battle.turn(), 1);
        assert!(battle.log().is_empty());
        assert_eq!(battle.user_team().members[0].health, 94.0);
        // Guard cleared: the same turn can be retried
        let retry = battle.begin_turn().unwrap();
        assert_eq!(retry, request);
    }

    #[test]
    fn test_terminal_response_fixes_winner_once() {
        let mut battle = active();
        let request = battle.begin_turn().unwrap();

        let mut last = response_for(&request, 94.0, &["Game Over! CPU wins!"]);
        last.game_over = true;
        last.winner = Some(Winner::Cpu);

        let report = battle.apply_turn(last).unwrap();
        assert!(report.is_terminal());
        assert_eq!(report.winner, Some(Winner::Cpu));

        assert_eq!(battle.phase(), Phase::Terminal);
        assert_eq!(battle.winner(), Some(Winner::Cpu));
        assert!(battle.popup().is_visible());
        assert!(battle.user_team().all_fainted());

        // No further turns once terminal
        assert_eq!(battle.begin_turn(), Err(TurnError::NotActive));
    }

    #[test]
    fn test_terminal_response_may_echo_turn_counter() {
        let mut battle = active();
        let request = battle.begin_turn().unwrap();

        // Sudden-death ending: counter echoed, not advanced
        let mut last = response_for(&request, 0.0, &["sudden death"]);
        last.current_turn = request.current_turn;
        last.game_over = true;
        last.winner = Some(Winner::Draw);

        let report = battle.apply_turn(last).unwrap();
        assert_eq!(report.turn, 1);
        assert_eq!(battle.winner(), Some(Winner::Draw));
        assert_eq!(battle.phase(), Phase::Terminal);
    }

    #[test]
    fn test_terminal_without_winner_is_rejected() {
        let mut battle = active();
        let request = battle.begin_turn().unwrap();

        let mut bad = response_for(&request, 10.0, &[]);
        bad.game_over = true;
        bad.winner = None;

        assert_eq!(
            battle.apply_turn(bad),
            Err(TurnError::Rejected(ResponseError::MissingWinner))
        );
        assert_eq!(battle.phase(), Phase::Active);
    }

    fn finished() -> Battle {
        let mut battle = active();
        let request = battle.begin_turn().unwrap();
        let mut last = response_for(&request, 94.0, &["done"]);
        last.game_over = true;
        last.winner = Some(Winner::User);
        battle.apply_turn(last).unwrap();
        battle
    }

    #[test]
    fn test_popup_dismiss_and_timed_reshow() {
        let mut battle = finished();
        let now = Instant::now();
        assert!(battle.popup().is_visible());

        battle.dismiss_game_over(now);
        assert!(!battle.popup().is_visible());
        assert_eq!(battle.popup().reshow_at(), Some(now + RESHOW_DELAY));

        assert!(!battle.poll_popup(now + RESHOW_DELAY - Duration::from_secs(1)));
        assert!(battle.poll_popup(now + RESHOW_DELAY));
    }

    #[test]
    fn test_play_again_resets_and_cancels_popup() {
        let mut battle = finished();
        let now = Instant::now();
        battle.dismiss_game_over(now);

        battle
            .load_roster(
                ["n1", "n2", "n3"].map(combatant).to_vec(),
                ["m1", "m2", "m3"].map(combatant).to_vec(),
            )
            .unwrap();

        assert_eq!(battle.phase(), Phase::Selecting);
        assert_eq!(battle.turn(), 1);
        assert!(battle.log().is_empty());
        assert!(battle.winner().is_none());
        assert!(battle.selection().is_empty());
        assert!(battle.user_team().is_empty());

        // The armed timer died with the old battle
        assert!(battle.popup().reshow_at().is_none());
        assert!(!battle.poll_popup(now + RESHOW_DELAY * 2));
    }

    #[test]
    fn test_leave_cancels_popup_timer() {
        let mut battle = finished();
        let now = Instant::now();
        battle.dismiss_game_over(now);

        battle.leave();
        assert_eq!(battle.phase(), Phase::Idle);
        assert!(!battle.poll_popup(now + RESHOW_DELAY * 2));
    }

    #[test]
    fn test_dismiss_outside_terminal_is_noop() {
        let mut battle = active();
        battle.dismiss_game_over(Instant::now());
        assert!(battle.popup().reshow_at().is_none());
    }

    #[test]
    fn test_selection_stays_closed_after_terminal() {
        let mut battle = finished();
        assert_eq!(battle.toggle_pick("u4"), Err(SelectionError::Closed));
    }
}
