//! Player roster: in-memory registry with search and JSON/CSV import/export.

use crate::models::error::RosterError;
use crate::models::player::{Player, PlayerId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::io::Read;

/// Fields supplied when registering a new player. Derived stats are computed.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewPlayer {
    pub real_name: String,
    pub lol_name: String,
    pub main_champion: String,
    pub kills: u32,
    pub deaths: u32,
    pub assists: u32,
    pub wins: u32,
    pub losses: u32,
    pub rank: String,
    pub tier: String,
    pub lp: i32,
    pub avatar_url: Option<String>,
}

/// Partial update; `None` fields are left as they are.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlayerUpdate {
    pub real_name: Option<String>,
    pub lol_name: Option<String>,
    pub main_champion: Option<String>,
    pub kills: Option<u32>,
    pub deaths: Option<u32>,
    pub assists: Option<u32>,
    pub wins: Option<u32>,
    pub losses: Option<u32>,
    pub rank: Option<String>,
    pub tier: Option<String>,
    pub lp: Option<i32>,
    pub avatar_url: Option<String>,
    pub champion_image_url: Option<String>,
}

/// One CSV row. Games played and win rate are derived on load.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PlayerRow {
    id: PlayerId,
    real_name: String,
    lol_name: String,
    main_champion: String,
    kda: f64,
    wins: u32,
    losses: u32,
    rank: String,
    tier: String,
    lp: i32,
}

impl From<PlayerRow> for Player {
    fn from(row: PlayerRow) -> Self {
        let mut p = Player {
            id: row.id,
            real_name: row.real_name,
            lol_name: row.lol_name,
            main_champion: row.main_champion,
            kda: row.kda,
            rank: row.rank,
            tier: row.tier,
            lp: row.lp,
            ..Player::default()
        };
        p.set_record(row.wins, row.losses);
        p
    }
}

/// All known players, in insertion order.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Roster {
    players: Vec<Player>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a roster from existing records. Ids must be unique.
    pub fn with_players(players: Vec<Player>) -> Result<Self, RosterError> {
        let mut roster = Self::new();
        for p in players {
            roster.insert(p)?;
        }
        Ok(roster)
    }

    /// Load a roster from CSV with header `id,realName,lolName,mainChampion,kda,wins,losses,rank,tier,lp`.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, RosterError> {
        let mut rdr = csv::Reader::from_reader(reader);
        let mut players = Vec::new();
        for row in rdr.deserialize::<PlayerRow>() {
            let row = row.map_err(|e| RosterError::InvalidCsv(e.to_string()))?;
            if let Some(msg) = kda_problem(&row.id, row.kda) {
                return Err(RosterError::InvalidCsv(msg));
            }
            players.push(Player::from(row));
        }
        Self::with_players(players)
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    /// Register a new player with a fresh id. Returns the stored record.
    pub fn add_player(&mut self, new: NewPlayer) -> Result<&Player, RosterError> {
        let lol_name = new.lol_name.trim();
        if lol_name.is_empty() {
            return Err(RosterError::EmptyName);
        }
        let mut player = Player::new(new.real_name.trim(), lol_name);
        player.main_champion = new.main_champion.trim().to_string();
        player.rank = new.rank;
        player.tier = new.tier;
        player.lp = new.lp;
        player.avatar_url = new.avatar_url;
        player.set_record(new.wins, new.losses);
        player.set_kda_totals(new.kills, new.deaths, new.assists);
        self.insert(player)
    }

    /// Insert an existing record as-is. Rejects duplicate ids.
    pub fn insert(&mut self, player: Player) -> Result<&Player, RosterError> {
        if self.get(&player.id).is_some() {
            return Err(RosterError::DuplicatePlayerId(player.id));
        }
        self.players.push(player);
        let last = self.players.len() - 1;
        Ok(&self.players[last])
    }

    /// Apply a partial update. Win rate follows wins/losses; KDA follows kill/death/assist totals.
    pub fn update_player(&mut self, id: &str, update: PlayerUpdate) -> Result<&Player, RosterError> {
        let p = self
            .players
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| RosterError::PlayerNotFound(id.to_string()))?;

        if let Some(name) = update.lol_name {
            let name = name.trim();
            if name.is_empty() {
                return Err(RosterError::EmptyName);
            }
            p.lol_name = name.to_string();
        }
        if let Some(v) = update.real_name {
            p.real_name = v.trim().to_string();
        }
        if let Some(v) = update.main_champion {
            p.main_champion = v.trim().to_string();
        }
        if let Some(v) = update.rank {
            p.rank = v;
        }
        if let Some(v) = update.tier {
            p.tier = v;
        }
        if let Some(v) = update.lp {
            p.lp = v;
        }
        if update.avatar_url.is_some() {
            p.avatar_url = update.avatar_url;
        }
        if update.champion_image_url.is_some() {
            p.champion_image_url = update.champion_image_url;
        }
        if update.wins.is_some() || update.losses.is_some() {
            let wins = update.wins.unwrap_or(p.wins);
            let losses = update.losses.unwrap_or(p.losses);
            p.set_record(wins, losses);
        }
        if update.kills.is_some() || update.deaths.is_some() || update.assists.is_some() {
            let kills = update.kills.unwrap_or(p.kills);
            let deaths = update.deaths.unwrap_or(p.deaths);
            let assists = update.assists.unwrap_or(p.assists);
            p.set_kda_totals(kills, deaths, assists);
        }
        Ok(p)
    }

    /// Remove a player by id, returning the removed record.
    pub fn remove_player(&mut self, id: &str) -> Result<Player, RosterError> {
        let idx = self
            .players
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| RosterError::PlayerNotFound(id.to_string()))?;
        Ok(self.players.remove(idx))
    }

    pub fn clear(&mut self) {
        self.players.clear();
    }

    /// Replace every player with a copy of `defaults`.
    pub fn restore_from(&mut self, defaults: &Roster) {
        self.players = defaults.players.clone();
    }

    /// Case-insensitive match on real name, LoL name, main champion or rank.
    /// An empty term returns everyone.
    pub fn search(&self, term: &str) -> Vec<&Player> {
        let term = term.trim().to_lowercase();
        if term.is_empty() {
            return self.players.iter().collect();
        }
        self.players
            .iter()
            .filter(|p| {
                [&p.real_name, &p.lol_name, &p.main_champion, &p.rank]
                    .iter()
                    .any(|field| field.to_lowercase().contains(&term))
            })
            .collect()
    }

    /// Pretty-printed JSON array of all players.
    pub fn export_json(&self) -> Result<String, RosterError> {
        serde_json::to_string_pretty(&self.players).map_err(|e| RosterError::InvalidJson(e.to_string()))
    }

    /// Replace the roster with a JSON array of players. On error the roster is unchanged.
    pub fn import_json(&mut self, json: &str) -> Result<usize, RosterError> {
        let mut imported: Vec<Player> =
            serde_json::from_str(json).map_err(|e| RosterError::InvalidJson(e.to_string()))?;
        let mut seen = HashSet::new();
        for p in &mut imported {
            if !seen.insert(p.id.clone()) {
                return Err(RosterError::DuplicatePlayerId(p.id.clone()));
            }
            if let Some(msg) = kda_problem(&p.id, p.kda) {
                return Err(RosterError::InvalidJson(msg));
            }
            p.normalize();
        }
        let count = imported.len();
        self.players = imported;
        log::info!("Imported {} player(s)", count);
        Ok(count)
    }
}

/// KDA must be a non-negative number.
fn kda_problem(id: &str, kda: f64) -> Option<String> {
    if kda >= 0.0 {
        return None;
    }
    Some(format!("player {} has invalid KDA {}", id, kda))
}
