//! Data structures: players, roster, selection pool, teams and sessions.

mod error;
mod player;
mod pool;
mod roster;
mod session;
mod team;

pub use error::{BalanceError, RosterError};
pub use player::{kda_ratio, win_rate, Player, PlayerId, KDA_WEIGHT, WIN_RATE_WEIGHT};
pub use pool::{SelectionPool, ToggleOutcome, POOL_CAPACITY, TEAM_SIZE};
pub use roster::{NewPlayer, PlayerUpdate, Roster};
pub use session::{SessionId, TeamSession};
pub use team::{BalanceMode, Side, Team, TeamId, TeamPair};
