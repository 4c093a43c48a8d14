//! Integration tests for team aggregates.

mod common;

use common::player;
use lol_team_builder::{aggregate, Player, TeamStats};

fn team(kdas: [f64; 5], win_rates: [f64; 5], wins: [u32; 5]) -> Vec<Player> {
    (0..5)
        .map(|i| player(&format!("p{i}"), kdas[i], win_rates[i], wins[i]))
        .collect()
}

#[test]
fn averages_and_total() {
    let players = team(
        [2.0, 3.0, 1.0, 4.0, 0.0],
        [50.0, 60.0, 40.0, 70.0, 30.0],
        [10, 5, 0, 3, 2],
    );
    let stats = aggregate(&players);
    assert!((stats.average_kda - 2.0).abs() < 1e-9);
    assert_eq!(stats.total_wins, 20);
    assert!((stats.average_win_rate - 50.0).abs() < 1e-9);
}

#[test]
fn no_rounding_is_applied() {
    let players = team(
        [1.0, 1.0, 1.0, 1.0, 2.0],
        [51.1, 51.1, 51.1, 51.1, 51.2],
        [0; 5],
    );
    let stats = aggregate(&players);
    assert!((stats.average_kda - 1.2).abs() < 1e-9);
    assert!((stats.average_win_rate - 51.12).abs() < 1e-9);
}

#[test]
fn empty_roster_yields_zeros() {
    assert_eq!(aggregate(&[]), TeamStats::default());
}

#[test]
fn total_wins_does_not_overflow() {
    let players = team([1.0; 5], [50.0; 5], [u32::MAX; 5]);
    assert_eq!(aggregate(&players).total_wins, 5 * u64::from(u32::MAX));
}
