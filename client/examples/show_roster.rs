//! Roster Viewer Example
//!
//! Fetches a fresh pair of rosters from a locally running game service and
//! prints every candidate with its battle-derived stats, the way the
//! selection screen shows them.

use anyhow::Result;
use machop_client::{BattleSession, Combatant, DEFAULT_BASE_URL, GameClient};

#[tokio::main]
async fn main() -> Result<()> {
    let mut session = BattleSession::new(GameClient::new(DEFAULT_BASE_URL));
    session.load_roster().await?;

    let battle = session.battle();

    println!("Your candidates (pick 3):");
    for combatant in battle.roster() {
        print_combatant(combatant);
    }

    println!();
    println!("CPU team:");
    for combatant in battle.cpu_roster() {
        print_combatant(combatant);
    }

    Ok(())
}

fn print_combatant(combatant: &Combatant) {
    let types = match &combatant.pokemon.secondary_type {
        Some(secondary) => format!("{}/{}", combatant.pokemon.primary_type, secondary),
        None => combatant.pokemon.primary_type.clone(),
    };
    println!(
        "  #{:03} {:<12} {:<16} HP {:>5.1}  ATK {:>6.2}",
        combatant.pokemon.pokemon_id,
        combatant.name(),
        types,
        combatant.max_health,
        combatant.attack_power
    );
}
