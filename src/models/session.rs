//! Team-generation session: a selection pool plus the last generated teams.

use crate::logic::generate_teams;
use crate::models::error::BalanceError;
use crate::models::player::Player;
use crate::models::pool::{SelectionPool, ToggleOutcome};
use crate::models::team::{BalanceMode, TeamPair};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a session.
pub type SessionId = Uuid;

/// One user's team-generation state. Not persisted.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TeamSession {
    pub id: SessionId,
    pub pool: SelectionPool,
    /// Teams from the last successful generation.
    pub teams: Option<TeamPair>,
}

impl Default for TeamSession {
    fn default() -> Self {
        Self::new()
    }
}

impl TeamSession {
    /// Create an empty session with a fresh id.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            pool: SelectionPool::new(),
            teams: None,
        }
    }

    /// Toggle a player in the selection pool.
    pub fn toggle_player(&mut self, player: &Player) -> ToggleOutcome {
        self.pool.toggle(player)
    }

    /// Clear the selection. Previously generated teams are kept.
    pub fn clear_selection(&mut self) {
        self.pool.clear();
    }

    /// Generate teams from the current selection.
    /// On failure the previously generated teams are left untouched.
    pub fn generate_teams(&mut self, mode: BalanceMode) -> Result<&TeamPair, BalanceError> {
        let pair = generate_teams(self.pool.players(), mode)?;
        Ok(self.teams.insert(pair))
    }
}
