use std::path::PathBuf;

use crypto_rush::config::{Config, GameConfig, MAX_ROUND_DURATION};
use crypto_rush::model::asset::Asset;

const FULL_TOML: &str = r#"
[server]
host = "127.0.0.1"
port = 3000

[database]
path = "./data/test.db"

[game]
round_duration = 120
start_balance = 5000.0

[[game.assets]]
name = "Bitcoin"
symbol = "BTC"
start_price = 45000.0
volatility = 0.002

[[game.assets]]
name = "Ethereum"
symbol = "ETH"
start_price = 2500.0
volatility = 0.003

[web]
dir = "public"

[logging]
level = "debug"
json = true
"#;

fn valid_game() -> GameConfig {
    GameConfig {
        round_duration: 180,
        start_balance: 10_000.0,
        assets: vec![Asset {
            name: "Bitcoin".to_string(),
            symbol: "BTC".to_string(),
            start_price: 45_000.0,
            volatility: 0.002,
        }],
    }
}

#[test]
fn parse_full_toml() {
    let config = Config::from_toml_str(FULL_TOML).unwrap();
    assert_eq!(config.server.bind_addr(), "127.0.0.1:3000");
    assert_eq!(config.database.path, PathBuf::from("./data/test.db"));
    assert_eq!(config.game.round_duration, 120);
    assert!((config.game.start_balance - 5000.0).abs() < f64::EPSILON);
    assert_eq!(config.game.assets.len(), 2);
    assert_eq!(config.game.assets[1].symbol, "ETH");
    assert!((config.game.assets[1].volatility - 0.003).abs() < f64::EPSILON);
    assert_eq!(config.web.dir, PathBuf::from("public"));
    assert_eq!(config.logging.level, "debug");
    assert!(config.logging.json);
}

#[test]
/// Verifies a config file on disk is read and validated end to end.
fn load_from_path_reads_and_validates() {
    let dir = std::env::temp_dir().join(format!("crypto_rush_cfg_{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("default.toml");
    std::fs::write(&path, FULL_TOML).unwrap();

    let config = Config::load_from_path(&path).unwrap();
    assert_eq!(config.game.round_duration, 120);
    assert_eq!(config.game.assets[0].symbol, "BTC");
}

#[test]
fn load_from_missing_path_fails() {
    assert!(Config::load_from_path(std::path::Path::new("/nonexistent/crypto-rush.toml")).is_err());
}

#[test]
/// Verifies startup validation catches every non-positive or missing game value.
fn game_validation_rejects_bad_values() {
    assert!(valid_game().validate().is_ok());

    let mut g = valid_game();
    g.round_duration = 0;
    assert!(g.validate().is_err());

    let mut g = valid_game();
    g.start_balance = 0.0;
    assert!(g.validate().is_err());

    let mut g = valid_game();
    g.assets.clear();
    assert!(g.validate().is_err());

    let mut g = valid_game();
    g.assets[0].start_price = -1.0;
    assert!(g.validate().is_err());

    let mut g = valid_game();
    g.assets[0].volatility = -0.1;
    assert!(g.validate().is_err());

    let mut g = valid_game();
    g.assets[0].symbol = "  ".to_string();
    assert!(g.validate().is_err());
}

#[test]
fn game_validation_rejects_duplicate_symbols() {
    let mut g = valid_game();
    let mut dup = g.assets[0].clone();
    dup.symbol = "btc".to_string();
    g.assets.push(dup);
    assert!(g.validate().is_err());
}

#[test]
fn zero_volatility_is_allowed() {
    let mut g = valid_game();
    g.assets[0].volatility = 0.0;
    assert!(g.validate().is_ok());
}

#[test]
/// Verifies absurd round lengths are refused at startup instead of
/// exhausting memory on every round request.
fn game_validation_caps_round_duration() {
    let mut g = valid_game();
    g.round_duration = MAX_ROUND_DURATION;
    assert!(g.validate().is_ok());

    g.round_duration = MAX_ROUND_DURATION + 1;
    assert!(g.validate().is_err());

    g.round_duration = u64::MAX;
    assert!(g.validate().is_err());
}
