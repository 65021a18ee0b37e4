use anyhow::{Context, Result};

use crypto_rush::config::Config;
use crypto_rush::score_store::ScoreStore;
use crypto_rush::server::{create_app, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    let config = match Config::load() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load config: {:#}", e);
            eprintln!("Set CRYPTO_RUSH_CONFIG or provide config/default.toml");
            std::process::exit(1);
        }
    };

    init_tracing(&config);

    tracing::info!(
        assets = config.game.assets.len(),
        round_duration = config.game.round_duration,
        start_balance = config.game.start_balance,
        db = %config.database.path.display(),
        "Starting crypto-rush"
    );

    let store = ScoreStore::open(&config.database.path).context("failed to initialize database")?;
    let state = AppState::new(config.game.clone(), store);
    let app = create_app(state, &config.web.dir);

    let addr = config.server.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    tracing::info!(address = %addr, "Server starting");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server failed")?;

    tracing::info!("Shutdown complete");
    Ok(())
}

fn init_tracing(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        config
            .logging
            .level
            .parse()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"))
    });
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if config.logging.json {
        builder.json().init();
    } else {
        builder.init();
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    tracing::info!("Ctrl+C received");
}
