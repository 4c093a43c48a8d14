//! Generated teams: Side, Team, TeamPair and the policy that produced them.

use crate::logic::aggregate;
use crate::models::player::Player;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a generated team.
pub type TeamId = Uuid;

/// Which side of the map a team plays on.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    #[default]
    Blue,
    Red,
}

impl Side {
    /// Display label for the side.
    pub fn team_name(self) -> &'static str {
        match self {
            Side::Blue => "Blue Team",
            Side::Red => "Red Team",
        }
    }
}

/// How a pool is split into two teams.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BalanceMode {
    /// Sort by fairness score and alternate picks.
    #[default]
    Balanced,
    /// Uniform shuffle, first half vs second half.
    Random,
}

/// A finished team of five with its aggregate stats.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    pub side: Side,
    pub players: Vec<Player>,
    pub average_kda: f64,
    pub total_wins: u64,
    pub average_win_rate: f64,
}

impl Team {
    pub fn new(side: Side, players: Vec<Player>) -> Self {
        let stats = aggregate(&players);
        Self {
            id: Uuid::new_v4(),
            name: side.team_name().to_string(),
            side,
            players,
            average_kda: stats.average_kda,
            total_wins: stats.total_wins,
            average_win_rate: stats.average_win_rate,
        }
    }

    /// True if a player with this id is on the team.
    pub fn contains(&self, player_id: &str) -> bool {
        self.players.iter().any(|p| p.id == player_id)
    }
}

/// The two teams produced by one balancer call.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamPair {
    pub blue: Team,
    pub red: Team,
    pub mode: BalanceMode,
    pub generated_at: DateTime<Utc>,
}

impl TeamPair {
    pub fn new(blue: Vec<Player>, red: Vec<Player>, mode: BalanceMode) -> Self {
        Self {
            blue: Team::new(Side::Blue, blue),
            red: Team::new(Side::Red, red),
            mode,
            generated_at: Utc::now(),
        }
    }

    /// Team for the given side.
    pub fn team(&self, side: Side) -> &Team {
        match side {
            Side::Blue => &self.blue,
            Side::Red => &self.red,
        }
    }
}
