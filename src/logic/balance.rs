//! Team balancer: split exactly ten players into two teams of five.

use crate::models::{BalanceError, BalanceMode, Player, TeamPair, POOL_CAPACITY, TEAM_SIZE};
use rand::seq::SliceRandom;
use rand::Rng;

/// Generate two teams from the pool using the given policy.
pub fn generate_teams(players: &[Player], mode: BalanceMode) -> Result<TeamPair, BalanceError> {
    match mode {
        BalanceMode::Balanced => balanced_partition(players),
        BalanceMode::Random => random_partition(players),
    }
}

/// Balanced split.
///
/// 1. Score each player: `0.4 * kda + 0.6 * win_rate`.
/// 2. Stable sort by score, descending (ties keep input order).
/// 3. Alternate picks: even positions to Blue, odd positions to Red.
pub fn balanced_partition(players: &[Player]) -> Result<TeamPair, BalanceError> {
    check_pool_size(players)?;

    let ranked = rank_by_fairness(players);
    let mut blue = Vec::with_capacity(TEAM_SIZE);
    let mut red = Vec::with_capacity(TEAM_SIZE);
    for (idx, p) in ranked.into_iter().enumerate() {
        if idx % 2 == 0 {
            blue.push(p.clone());
        } else {
            red.push(p.clone());
        }
    }

    log::debug!("Generated balanced teams from {} players", players.len());
    Ok(TeamPair::new(blue, red, BalanceMode::Balanced))
}

/// Random split using the thread-local RNG.
pub fn random_partition(players: &[Player]) -> Result<TeamPair, BalanceError> {
    random_partition_with_rng(players, &mut rand::thread_rng())
}

/// Random split: shuffle, first five to Blue, remaining five to Red.
pub fn random_partition_with_rng<R: Rng + ?Sized>(
    players: &[Player],
    rng: &mut R,
) -> Result<TeamPair, BalanceError> {
    check_pool_size(players)?;

    let mut shuffled = players.to_vec();
    shuffled.shuffle(rng);
    let red = shuffled.split_off(TEAM_SIZE);

    log::debug!("Generated random teams from {} players", players.len());
    Ok(TeamPair::new(shuffled, red, BalanceMode::Random))
}

/// Players ordered by fairness score, highest first. Stable.
pub fn rank_by_fairness(players: &[Player]) -> Vec<&Player> {
    let mut ranked: Vec<&Player> = players.iter().collect();
    ranked.sort_by(|a, b| b.fairness_score().total_cmp(&a.fairness_score()));
    ranked
}

fn check_pool_size(players: &[Player]) -> Result<(), BalanceError> {
    if players.len() != POOL_CAPACITY {
        return Err(BalanceError::WrongPoolSize {
            required: POOL_CAPACITY,
            selected: players.len(),
        });
    }
    Ok(())
}
