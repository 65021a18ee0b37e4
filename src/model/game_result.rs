use serde::{Deserialize, Serialize};

pub const USERNAME_MAX_CHARS: usize = 20;

/// A player's end-of-round outcome. `score` is filled in by the server,
/// whatever the client sends for it is ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameResult {
    pub username: String,
    pub final_balance: f64,
    pub trades_count: u32,
    #[serde(default)]
    pub score: f64,
}

impl GameResult {
    /// Usernames must be non-empty and at most 20 characters.
    pub fn has_valid_username(&self) -> bool {
        let len = self.username.chars().count();
        (1..=USERNAME_MAX_CHARS).contains(&len)
    }
}

/// A persisted leaderboard row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub id: i64,
    pub username: String,
    pub score: f64,
    pub trades: u32,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
