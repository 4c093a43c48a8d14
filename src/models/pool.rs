//! Selection pool: the players picked for the next match.

use crate::models::player::Player;
use crate::models::roster::Roster;
use serde::{Deserialize, Serialize};

/// Players per team.
pub const TEAM_SIZE: usize = 5;
/// Maximum players in a pool (two full teams).
pub const POOL_CAPACITY: usize = TEAM_SIZE * 2;

/// Result of toggling a player in or out of the pool.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToggleOutcome {
    Added,
    Removed,
    /// Pool already full; nothing changed.
    CapacityExceeded,
}

/// Ordered set of selected players, unique by id, never above `POOL_CAPACITY`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SelectionPool {
    players: Vec<Player>,
}

impl SelectionPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove the player if selected, otherwise add it when there is room.
    pub fn toggle(&mut self, player: &Player) -> ToggleOutcome {
        if let Some(idx) = self.players.iter().position(|p| p.id == player.id) {
            self.players.remove(idx);
            log::debug!("Deselected player {} ({}/{})", player.id, self.len(), POOL_CAPACITY);
            return ToggleOutcome::Removed;
        }
        if self.is_full() {
            log::debug!("Pool full, rejected player {}", player.id);
            return ToggleOutcome::CapacityExceeded;
        }
        self.players.push(player.clone());
        log::debug!("Selected player {} ({}/{})", player.id, self.len(), POOL_CAPACITY);
        ToggleOutcome::Added
    }

    /// Empty the pool.
    pub fn clear(&mut self) {
        self.players.clear();
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn contains(&self, player_id: &str) -> bool {
        self.players.iter().any(|p| p.id == player_id)
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.players.len() >= POOL_CAPACITY
    }

    /// Drop a player that no longer exists on the roster. Returns true if one was removed.
    pub fn forget(&mut self, player_id: &str) -> bool {
        let before = self.players.len();
        self.players.retain(|p| p.id != player_id);
        self.players.len() != before
    }

    /// Drop every selected player that is no longer on the roster. Returns how many were dropped.
    pub fn retain_known(&mut self, roster: &Roster) -> usize {
        let before = self.players.len();
        self.players.retain(|p| roster.get(&p.id).is_some());
        before - self.players.len()
    }
}
