//! HTTP surface: round start, score submission and the leaderboard.

pub mod app;
pub mod error;
pub mod routes;
pub mod state;

pub use app::create_app;
pub use state::AppState;
