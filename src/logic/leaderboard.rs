//! Dashboard rankings over the roster.

use crate::models::Player;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Hall of fame size.
pub const HALL_OF_FAME_SIZE: usize = 3;

/// Roster-wide averages shown on the dashboard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterOverview {
    pub player_count: usize,
    pub average_kda: f64,
    pub average_win_rate: f64,
}

/// Count plus mean KDA and mean win rate. Zeros when empty.
pub fn roster_overview(players: &[Player]) -> RosterOverview {
    if players.is_empty() {
        return RosterOverview::default();
    }
    let n = players.len() as f64;
    RosterOverview {
        player_count: players.len(),
        average_kda: players.iter().map(|p| p.kda).sum::<f64>() / n,
        average_win_rate: players.iter().map(|p| p.win_rate).sum::<f64>() / n,
    }
}

pub fn top_by_win_rate(players: &[Player], limit: usize) -> Vec<&Player> {
    top_by(players, limit, |a, b| b.win_rate.total_cmp(&a.win_rate))
}

pub fn top_by_kda(players: &[Player], limit: usize) -> Vec<&Player> {
    top_by(players, limit, |a, b| b.kda.total_cmp(&a.kda))
}

pub fn top_by_wins(players: &[Player], limit: usize) -> Vec<&Player> {
    top_by(players, limit, |a, b| b.wins.cmp(&a.wins))
}

pub fn top_by_losses(players: &[Player], limit: usize) -> Vec<&Player> {
    top_by(players, limit, |a, b| b.losses.cmp(&a.losses))
}

/// Best three by KDA, only counting players with a KDA and at least one game.
pub fn hall_of_fame(players: &[Player]) -> Vec<&Player> {
    let mut eligible: Vec<&Player> = players
        .iter()
        .filter(|p| p.kda > 0.0 && p.games_played > 0)
        .collect();
    eligible.sort_by(|a, b| b.kda.total_cmp(&a.kda));
    eligible.truncate(HALL_OF_FAME_SIZE);
    eligible
}

fn top_by<F>(players: &[Player], limit: usize, cmp: F) -> Vec<&Player>
where
    F: Fn(&Player, &Player) -> Ordering,
{
    let mut sorted: Vec<&Player> = players.iter().collect();
    sorted.sort_by(|a, b| cmp(*a, *b));
    sorted.truncate(limit);
    sorted
}
