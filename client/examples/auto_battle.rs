//! Auto Battle Example
//!
//! Picks three random candidates, confirms the team and plays a battle to
//! its end against a locally running game service, printing the narration
//! as it arrives. Ends with the game-over cycle: dismiss the popup to read
//! the full log before it comes back.

use anyhow::Result;
use machop_client::{BattleSession, DEFAULT_BASE_URL, GameClient, Winner};
use rand::seq::SliceRandom;

#[tokio::main]
async fn main() -> Result<()> {
    println!("Auto Battle");
    println!("===========");

    let mut session = BattleSession::new(GameClient::new(DEFAULT_BASE_URL));
    session.load_roster().await?;

    let ids: Vec<String> = session
        .battle()
        .roster()
        .iter()
        .map(|c| c.id.clone())
        .collect();
    let picks: Vec<String> = {
        let mut rng = rand::thread_rng();
        ids.choose_multiple(&mut rng, 3).cloned().collect()
    };

    for id in &picks {
        session.toggle_pick(id)?;
        if let Some(combatant) = session.battle().roster().iter().find(|c| &c.id == id) {
            println!("Picked {}", combatant.name());
        }
    }
    session.confirm_team()?;
    println!();

    loop {
        let report = session.advance_turn().await?;
        for entry in &report.entries {
            println!("  {entry}");
        }

        if let Some(winner) = report.winner {
            println!();
            match winner {
                Winner::User => println!("You Win!"),
                Winner::Cpu => println!("You Lose!"),
                Winner::Draw => println!("It's a Draw!"),
            }
            break;
        }
    }

    // Dismiss the popup to look at the full battle log; it re-arms itself
    if let Some(delay) = session.dismiss_game_over() {
        println!();
        println!(
            "Battle log ({} entries, popup returns in {}s):",
            session.battle().log().len(),
            delay.as_secs()
        );
        for entry in session.battle().log() {
            println!("  {entry}");
        }
    }

    Ok(())
}
