//! Integration tests for the selection pool and team sessions.

mod common;

use common::{ids, players};
use lol_team_builder::{
    BalanceError, BalanceMode, Roster, SelectionPool, TeamSession, ToggleOutcome, POOL_CAPACITY,
};

#[test]
fn toggle_adds_then_removes() {
    let ps = players(2);
    let mut pool = SelectionPool::new();
    assert_eq!(pool.toggle(&ps[0]), ToggleOutcome::Added);
    assert_eq!(pool.toggle(&ps[1]), ToggleOutcome::Added);
    assert_eq!(pool.len(), 2);

    assert_eq!(pool.toggle(&ps[0]), ToggleOutcome::Removed);
    assert_eq!(ids(pool.players()), vec!["p1"]);
    assert!(!pool.contains("p0"));
}

#[test]
fn toggle_matches_by_id_not_by_value() {
    let ps = players(1);
    let mut pool = SelectionPool::new();
    pool.toggle(&ps[0]);

    let mut edited = ps[0].clone();
    edited.kda = 9.9;
    assert_eq!(pool.toggle(&edited), ToggleOutcome::Removed);
    assert!(pool.is_empty());
}

#[test]
fn eleventh_player_is_rejected_without_change() {
    let ps = players(11);
    let mut pool = SelectionPool::new();
    for p in &ps[..POOL_CAPACITY] {
        assert_eq!(pool.toggle(p), ToggleOutcome::Added);
    }
    assert!(pool.is_full());
    let before = pool.clone();

    assert_eq!(pool.toggle(&ps[10]), ToggleOutcome::CapacityExceeded);
    assert_eq!(pool, before);
    assert_eq!(pool.len(), POOL_CAPACITY);
    assert!(!pool.contains("p10"));
}

#[test]
fn full_pool_still_allows_removal() {
    let ps = players(10);
    let mut pool = SelectionPool::new();
    for p in &ps {
        pool.toggle(p);
    }
    assert_eq!(pool.toggle(&ps[3]), ToggleOutcome::Removed);
    assert_eq!(pool.len(), 9);
}

#[test]
fn clear_empties_pool() {
    let ps = players(4);
    let mut pool = SelectionPool::new();
    for p in &ps {
        pool.toggle(p);
    }
    pool.clear();
    assert!(pool.is_empty());
}

#[test]
fn forget_drops_player_if_present() {
    let ps = players(3);
    let mut pool = SelectionPool::new();
    for p in &ps {
        pool.toggle(p);
    }
    assert!(pool.forget("p1"));
    assert!(!pool.forget("p1"));
    assert_eq!(ids(pool.players()), vec!["p0", "p2"]);
}

#[test]
fn session_generates_from_full_selection() {
    let ps = players(10);
    let mut session = TeamSession::new();
    for p in &ps {
        session.toggle_player(p);
    }
    let teams = session.generate_teams(BalanceMode::Balanced).unwrap();
    assert_eq!(teams.blue.players.len(), 5);
    assert_eq!(teams.red.players.len(), 5);
    assert!(session.teams.is_some());
}

#[test]
fn failed_generation_keeps_previous_teams() {
    let ps = players(10);
    let mut session = TeamSession::new();
    for p in &ps {
        session.toggle_player(p);
    }
    let first = session.generate_teams(BalanceMode::Balanced).unwrap().clone();

    session.toggle_player(&ps[0]);
    assert_eq!(
        session.generate_teams(BalanceMode::Random).unwrap_err(),
        BalanceError::WrongPoolSize {
            required: 10,
            selected: 9
        }
    );
    assert_eq!(session.teams.as_ref(), Some(&first));
}

#[test]
fn clearing_selection_keeps_generated_teams() {
    let ps = players(10);
    let mut session = TeamSession::new();
    for p in &ps {
        session.toggle_player(p);
    }
    session.generate_teams(BalanceMode::Random).unwrap();
    session.clear_selection();
    assert!(session.pool.is_empty());
    assert!(session.teams.is_some());
}

#[test]
fn retain_known_drops_players_missing_after_import() {
    let ps = players(10);
    let mut roster = Roster::with_players(ps.clone()).unwrap();
    let mut session = TeamSession::new();
    for p in &ps {
        session.toggle_player(p);
    }

    let kept = serde_json::to_string(&ps[..4]).unwrap();
    roster.import_json(&kept).unwrap();
    assert_eq!(session.pool.retain_known(&roster), 6);
    assert_eq!(ids(session.pool.players()), vec!["p0", "p1", "p2", "p3"]);
    assert!(session.generate_teams(BalanceMode::Balanced).is_err());
}

#[test]
fn retain_known_empties_pool_after_roster_clear() {
    let ps = players(10);
    let mut roster = Roster::with_players(ps.clone()).unwrap();
    let mut pool = SelectionPool::new();
    for p in &ps {
        pool.toggle(p);
    }
    assert_eq!(pool.retain_known(&roster), 0);

    roster.clear();
    assert_eq!(pool.retain_known(&roster), 10);
    assert!(pool.is_empty());
}
