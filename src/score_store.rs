use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection};

use crate::model::game_result::{GameResult, LeaderboardEntry};

pub const DEFAULT_LEADERBOARD_LIMIT: usize = 10;
pub const MAX_LEADERBOARD_LIMIT: usize = 100;

/// SQLite-backed leaderboard. Opens a fresh connection per operation, so the
/// handle is cheap to clone into blocking tasks.
#[derive(Debug, Clone)]
pub struct ScoreStore {
    path: PathBuf,
}

impl ScoreStore {
    /// Create parent directories and the schema if needed.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let store = Self {
            path: path.as_ref().to_path_buf(),
        };
        if let Some(parent) = store.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        let conn = store.connect()?;
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS leaderboard (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                username TEXT NOT NULL,
                score REAL NOT NULL,
                trades INTEGER NOT NULL,
                created_at TEXT NOT NULL
            );
            CREATE INDEX IF NOT EXISTS idx_score ON leaderboard(score DESC);
            "#,
        )
        .context("failed to create leaderboard schema")?;
        Ok(store)
    }

    fn connect(&self) -> Result<Connection> {
        Connection::open(&self.path)
            .with_context(|| format!("failed to open {}", self.path.display()))
    }

    pub fn save_score(&self, result: &GameResult) -> Result<i64> {
        let conn = self.connect()?;
        let now = Utc::now().to_rfc3339();
        if let Err(e) = conn.execute(
            r#"
            INSERT INTO leaderboard (username, score, trades, created_at)
            VALUES (?1, ?2, ?3, ?4)
            "#,
            params![result.username, result.score, result.trades_count, now],
        ) {
            tracing::error!(error = %e, username = %result.username, "Failed to save score");
            return Err(e.into());
        }
        let id = conn.last_insert_rowid();

        tracing::info!(
            username = %result.username,
            score = result.score,
            id,
            "Score saved"
        );
        Ok(id)
    }

    /// Highest scores first; ties keep insertion order.
    pub fn top_scores(&self, limit: usize) -> Result<Vec<LeaderboardEntry>> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT id, username, score, trades, created_at
            FROM leaderboard
            ORDER BY score DESC, id ASC
            LIMIT ?1
            "#,
        )?;

        let rows = stmt.query_map([limit as i64], |row| {
            let created_at: String = row.get(4)?;
            Ok((
                row.get::<_, i64>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, f64>(2)?,
                row.get::<_, u32>(3)?,
                created_at,
            ))
        })?;

        let mut entries = Vec::new();
        for row in rows {
            let (id, username, score, trades, created_at) = match row {
                Ok(v) => v,
                Err(e) => {
                    tracing::warn!(error = %e, "Failed to read leaderboard row");
                    continue;
                }
            };
            let created_at = match DateTime::parse_from_rfc3339(&created_at) {
                Ok(ts) => ts.with_timezone(&Utc),
                Err(e) => {
                    tracing::warn!(id, error = %e, "Skipping leaderboard row with bad created_at");
                    continue;
                }
            };
            entries.push(LeaderboardEntry {
                id,
                username,
                score,
                trades,
                created_at,
            });
        }
        Ok(entries)
    }
}

/// Out-of-range or unparsable limits fall back to the default.
pub fn leaderboard_limit(requested: Option<&str>) -> usize {
    requested
        .and_then(|s| s.trim().parse::<usize>().ok())
        .filter(|l| (1..=MAX_LEADERBOARD_LIMIT).contains(l))
        .unwrap_or(DEFAULT_LEADERBOARD_LIMIT)
}
