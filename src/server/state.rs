use std::sync::Arc;

use crate::config::GameConfig;
use crate::score_store::ScoreStore;

/// Shared by all handlers. Game config is read-only for the process lifetime.
#[derive(Debug, Clone)]
pub struct AppState {
    pub game: Arc<GameConfig>,
    pub store: ScoreStore,
}

impl AppState {
    pub fn new(game: GameConfig, store: ScoreStore) -> Self {
        Self {
            game: Arc::new(game),
            store,
        }
    }
}
