//! Player record, stat helpers and the fairness score used for balancing.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a player (opaque string, e.g. a UUID or a storage key).
pub type PlayerId = String;

/// Weight of KDA in the fairness score.
pub const KDA_WEIGHT: f64 = 0.4;
/// Weight of win rate in the fairness score.
pub const WIN_RATE_WEIGHT: f64 = 0.6;

/// A tracked League of Legends player.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: PlayerId,
    pub real_name: String,
    pub lol_name: String,
    pub main_champion: String,
    pub kda: f64,
    #[serde(default)]
    pub kills: u32,
    #[serde(default)]
    pub deaths: u32,
    #[serde(default)]
    pub assists: u32,
    pub wins: u32,
    pub losses: u32,
    /// Percentage 0-100, one decimal.
    pub win_rate: f64,
    /// wins + losses, widened so large records cannot overflow.
    pub games_played: u64,
    /// Rank label, e.g. "Diamond".
    pub rank: String,
    /// Division within the rank, e.g. "II".
    pub tier: String,
    pub lp: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub champion_image_url: Option<String>,
}

impl Player {
    /// Create a new player with a fresh id. Stats start at zero.
    pub fn new(real_name: impl Into<String>, lol_name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            real_name: real_name.into(),
            lol_name: lol_name.into(),
            ..Self::default()
        }
    }

    /// Set wins and losses, keeping `games_played` and `win_rate` consistent.
    pub fn set_record(&mut self, wins: u32, losses: u32) {
        self.wins = wins;
        self.losses = losses;
        self.games_played = u64::from(wins) + u64::from(losses);
        self.win_rate = win_rate(wins, losses);
    }

    /// Set kill/death/assist totals and recompute `kda` from them.
    pub fn set_kda_totals(&mut self, kills: u32, deaths: u32, assists: u32) {
        self.kills = kills;
        self.deaths = deaths;
        self.assists = assists;
        self.kda = kda_ratio(kills, deaths, assists);
    }

    /// Recompute derived fields (`games_played`, `win_rate`) from wins/losses.
    pub fn normalize(&mut self) {
        self.set_record(self.wins, self.losses);
    }

    /// Weighted skill estimate used to rank players before partitioning.
    pub fn fairness_score(&self) -> f64 {
        KDA_WEIGHT * self.kda + WIN_RATE_WEIGHT * self.win_rate
    }
}

/// Win percentage rounded to one decimal; 0 when no games were played.
pub fn win_rate(wins: u32, losses: u32) -> f64 {
    let total = u64::from(wins) + u64::from(losses);
    if total == 0 {
        return 0.0;
    }
    (f64::from(wins) / total as f64 * 100.0 * 10.0).round() / 10.0
}

/// (kills + assists) / max(deaths, 1), rounded to two decimals.
pub fn kda_ratio(kills: u32, deaths: u32, assists: u32) -> f64 {
    let ratio = (f64::from(kills) + f64::from(assists)) / f64::from(deaths.max(1));
    (ratio * 100.0).round() / 100.0
}
