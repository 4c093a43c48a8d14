//! Shared player fixtures for integration tests.

#![allow(dead_code)]

use lol_team_builder::Player;

/// Player with the stats that matter for balancing.
pub fn player(id: &str, kda: f64, win_rate: f64, wins: u32) -> Player {
    Player {
        id: id.to_string(),
        real_name: format!("Real {id}"),
        lol_name: format!("Summoner{id}"),
        kda,
        win_rate,
        wins,
        ..Player::default()
    }
}

/// `n` players with distinct, descending fairness scores.
pub fn players(n: usize) -> Vec<Player> {
    (0..n)
        .map(|i| player(&format!("p{i}"), 3.0, 90.0 - i as f64 * 5.0, 10 + i as u32))
        .collect()
}

pub fn ids(players: &[Player]) -> Vec<String> {
    players.iter().map(|p| p.id.clone()).collect()
}
