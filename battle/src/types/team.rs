//! Team state

use machop_protocol::Combatant;

/// The ordered members engaged on one side of a battle.
///
/// Before a battle starts this is empty. Once the battle is active it holds
/// the confirmed members (three for the user, the full fetched roster for
/// the CPU) and is only ever replaced wholesale by adopted turn responses;
/// fainted members stay in place for display.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Team {
    /// Members in team order
    pub members: Vec<Combatant>,
}

impl Team {
    /// Create a team from members already in order
    pub fn new(members: Vec<Combatant>) -> Self {
        Self { members }
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Combatant> {
        self.members.iter()
    }

    /// Find a member by its roster id
    pub fn get(&self, id: &str) -> Option<&Combatant> {
        self.members.iter().find(|c| c.id == id)
    }

    /// Count members still standing
    pub fn alive_count(&self) -> usize {
        self.members.iter().filter(|c| !c.is_fainted()).count()
    }

    /// Check if every member has fainted
    pub fn all_fainted(&self) -> bool {
        !self.members.is_empty() && self.members.iter().all(|c| c.is_fainted())
    }

    /// Total health across members still standing
    pub fn remaining_health(&self) -> f64 {
        self.members
            .iter()
            .filter(|c| !c.is_fainted())
            .map(|c| c.health)
            .sum()
    }
}
