//! Team aggregates: mean KDA, mean win rate, total wins.

use crate::models::Player;
use serde::{Deserialize, Serialize};

/// Summary stats for a group of players. Not rounded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamStats {
    pub average_kda: f64,
    pub total_wins: u64,
    pub average_win_rate: f64,
}

/// Compute the aggregates for a roster. An empty roster yields zeros.
pub fn aggregate(players: &[Player]) -> TeamStats {
    if players.is_empty() {
        return TeamStats::default();
    }
    let n = players.len() as f64;
    TeamStats {
        average_kda: players.iter().map(|p| p.kda).sum::<f64>() / n,
        total_wins: players.iter().map(|p| u64::from(p.wins)).sum(),
        average_win_rate: players.iter().map(|p| p.win_rate).sum::<f64>() / n,
    }
}
