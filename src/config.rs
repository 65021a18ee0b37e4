use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::Deserialize;

use crate::model::asset::Asset;

pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";
/// One day of one-second ticks.
pub const MAX_ROUND_DURATION: u64 = 86_400;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    pub game: GameConfig,
    #[serde(default)]
    pub web: WebConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default = "default_db_path")]
    pub path: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GameConfig {
    /// Seconds per round; one price point per second.
    #[serde(default = "default_round_duration")]
    pub round_duration: u64,
    #[serde(default = "default_start_balance")]
    pub start_balance: f64,
    #[serde(default)]
    pub assets: Vec<Asset>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WebConfig {
    /// Static client directory, relative to the working directory.
    #[serde(default = "default_web_dir")]
    pub dir: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub json: bool,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_db_path() -> PathBuf {
    PathBuf::from("./data.db")
}

fn default_round_duration() -> u64 {
    180
}

fn default_start_balance() -> f64 {
    10_000.0
}

fn default_web_dir() -> PathBuf {
    PathBuf::from("web")
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_db_path(),
        }
    }
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            dir: default_web_dir(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

impl ServerConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl GameConfig {
    /// Reject values that would make the simulator or score formula meaningless.
    pub fn validate(&self) -> Result<()> {
        if self.round_duration == 0 {
            bail!("game.round_duration must be > 0");
        }
        if self.round_duration > MAX_ROUND_DURATION {
            bail!(
                "game.round_duration must be <= {}, got {}",
                MAX_ROUND_DURATION,
                self.round_duration
            );
        }
        if !(self.start_balance > 0.0) || !self.start_balance.is_finite() {
            bail!(
                "game.start_balance must be a positive number, got {}",
                self.start_balance
            );
        }
        if self.assets.is_empty() {
            bail!("game.assets must contain at least one asset");
        }

        let mut seen = HashSet::new();
        for asset in &self.assets {
            let symbol = asset.symbol.trim();
            if symbol.is_empty() {
                bail!("asset '{}' has an empty symbol", asset.name);
            }
            if !seen.insert(symbol.to_ascii_uppercase()) {
                bail!("duplicate asset symbol '{}'", symbol);
            }
            if !(asset.start_price > 0.0) || !asset.start_price.is_finite() {
                bail!(
                    "asset '{}': start_price must be > 0, got {}",
                    symbol,
                    asset.start_price
                );
            }
            if !(asset.volatility >= 0.0) || !asset.volatility.is_finite() {
                bail!(
                    "asset '{}': volatility must be >= 0, got {}",
                    symbol,
                    asset.volatility
                );
            }
        }
        Ok(())
    }
}

impl Config {
    /// Load from `CRYPTO_RUSH_CONFIG` or `config/default.toml`, apply env
    /// overrides and validate.
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();

        let config_path = std::env::var("CRYPTO_RUSH_CONFIG")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH));
        Self::load_from_path(&config_path)
    }

    pub fn load_from_path(config_path: &Path) -> Result<Self> {
        let config_str = std::fs::read_to_string(config_path)
            .with_context(|| format!("failed to read {}", config_path.display()))?;

        let mut config = Self::from_toml_str(&config_str)
            .with_context(|| format!("failed to parse {}", config_path.display()))?;

        config.apply_env_overrides(|key| std::env::var(key).ok())?;
        config.game.validate().context("invalid [game] section")?;

        Ok(config)
    }

    pub fn from_toml_str(s: &str) -> Result<Self> {
        toml::from_str(s).context("invalid config toml")
    }

    /// `PORT`, `HOST`, `DB_PATH` and `LOG_LEVEL` win over the file.
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(port) = lookup("PORT") {
            self.server.port = port
                .trim()
                .parse()
                .with_context(|| format!("invalid PORT '{}'", port))?;
        }
        if let Some(host) = lookup("HOST").filter(|v| !v.trim().is_empty()) {
            self.server.host = host.trim().to_string();
        }
        if let Some(path) = lookup("DB_PATH").filter(|v| !v.trim().is_empty()) {
            self.database.path = PathBuf::from(path.trim());
        }
        if let Some(level) = lookup("LOG_LEVEL").filter(|v| !v.trim().is_empty()) {
            self.logging.level = level.trim().to_string();
        }
        Ok(())
    }
}
