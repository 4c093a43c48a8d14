//! Errors for team generation and roster management.

use crate::models::player::PlayerId;

/// Errors that can occur while generating teams.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum BalanceError {
    /// Pool does not hold exactly the number of players needed for two full teams.
    WrongPoolSize { required: usize, selected: usize },
}

impl std::fmt::Display for BalanceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BalanceError::WrongPoolSize { required, selected } => {
                write!(f, "Select exactly {} players (selected {})", required, selected)
            }
        }
    }
}

impl std::error::Error for BalanceError {}

/// Errors that can occur while editing the player roster.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RosterError {
    /// No player with this id.
    PlayerNotFound(PlayerId),
    /// A player with this id is already on the roster.
    DuplicatePlayerId(PlayerId),
    /// LoL name was empty after trimming.
    EmptyName,
    /// Import payload was not a JSON array of players.
    InvalidJson(String),
    /// A CSV row could not be read.
    InvalidCsv(String),
}

impl std::fmt::Display for RosterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RosterError::PlayerNotFound(id) => write!(f, "Player not found: {}", id),
            RosterError::DuplicatePlayerId(id) => write!(f, "A player with id {} already exists", id),
            RosterError::EmptyName => write!(f, "Player name must not be empty"),
            RosterError::InvalidJson(msg) => write!(f, "Invalid JSON file: {}", msg),
            RosterError::InvalidCsv(msg) => write!(f, "Invalid CSV file: {}", msg),
        }
    }
}

impl std::error::Error for RosterError {}
