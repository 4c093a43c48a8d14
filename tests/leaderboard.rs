//! Integration tests for dashboard rankings.

mod common;

use common::{ids, player};
use lol_team_builder::{
    hall_of_fame, roster_overview, top_by_kda, top_by_losses, top_by_win_rate, top_by_wins,
    Player, RosterOverview,
};

fn roster() -> Vec<Player> {
    let mut ps = vec![
        player("a", 2.8, 59.7, 145),
        player("b", 3.2, 65.2, 167),
        player("c", 2.1, 54.5, 134),
        player("d", 0.0, 62.4, 156),
        player("e", 1.8, 58.0, 145),
    ];
    let losses = [98, 89, 112, 94, 105];
    for (p, l) in ps.iter_mut().zip(losses) {
        p.losses = l;
        p.games_played = u64::from(p.wins) + u64::from(l);
    }
    ps
}

fn id_list(players: Vec<&Player>) -> Vec<String> {
    players.into_iter().map(|p| p.id.clone()).collect()
}

#[test]
fn rankings_sort_descending_and_truncate() {
    let ps = roster();
    assert_eq!(id_list(top_by_win_rate(&ps, 3)), vec!["b", "d", "a"]);
    assert_eq!(id_list(top_by_kda(&ps, 2)), vec!["b", "a"]);
    assert_eq!(id_list(top_by_losses(&ps, 1)), vec!["c"]);
    // a and e tie on wins; input order kept.
    assert_eq!(id_list(top_by_wins(&ps, 10)), vec!["b", "d", "a", "e", "c"]);
}

#[test]
fn hall_of_fame_skips_players_without_kda_or_games() {
    let mut ps = roster();
    ps[1].games_played = 0;
    assert_eq!(id_list(hall_of_fame(&ps)), vec!["a", "c", "e"]);
}

#[test]
fn hall_of_fame_may_be_short() {
    let ps = vec![player("x", 1.5, 50.0, 1)];
    assert!(hall_of_fame(&ps).is_empty());

    let mut ps = ps;
    ps[0].games_played = 2;
    assert_eq!(ids(&ps), id_list(hall_of_fame(&ps)));
}

#[test]
fn overview_averages() {
    let ps = roster();
    let overview = roster_overview(&ps);
    assert_eq!(overview.player_count, 5);
    assert!((overview.average_kda - 1.98).abs() < 1e-9);
    assert!((overview.average_win_rate - 59.96).abs() < 1e-9);
    assert_eq!(roster_overview(&[]), RosterOverview::default());
}
