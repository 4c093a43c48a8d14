//! Team-building logic: balancing, aggregates and dashboard rankings.

mod aggregate;
mod balance;
mod leaderboard;

pub use aggregate::{aggregate, TeamStats};
pub use balance::{
    balanced_partition, generate_teams, random_partition, random_partition_with_rng,
    rank_by_fairness,
};
pub use leaderboard::{
    hall_of_fame, roster_overview, top_by_kda, top_by_losses, top_by_win_rate, top_by_wins,
    RosterOverview, HALL_OF_FAME_SIZE,
};
