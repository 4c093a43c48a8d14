//! LoL team builder: library with player models, selection pool and team balancing.

pub mod logic;
pub mod models;

pub use logic::{
    aggregate, balanced_partition, generate_teams, hall_of_fame, random_partition,
    random_partition_with_rng, rank_by_fairness, roster_overview, top_by_kda, top_by_losses,
    top_by_win_rate, top_by_wins, RosterOverview, TeamStats, HALL_OF_FAME_SIZE,
};
pub use models::{
    kda_ratio, win_rate, BalanceError, BalanceMode, NewPlayer, Player, PlayerId, PlayerUpdate,
    Roster, RosterError, SelectionPool, SessionId, Side, Team, TeamId, TeamPair, TeamSession,
    ToggleOutcome, KDA_WEIGHT, POOL_CAPACITY, TEAM_SIZE, WIN_RATE_WEIGHT,
};
