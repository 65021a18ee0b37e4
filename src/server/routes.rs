use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::game::{build_round, calculate_score, PriceSimulator};
use crate::model::game_result::{GameResult, LeaderboardEntry};
use crate::model::price::RoundData;
use crate::score_store::leaderboard_limit;
use crate::server::error::{ApiError, ApiResult};
use crate::server::state::AppState;

/// `GET|POST /api/game/start`
pub async fn start_round(State(state): State<AppState>) -> ApiResult<Json<RoundData>> {
    // Fresh generator per request; nothing to lock.
    let mut simulator = PriceSimulator::from_entropy();
    let round = build_round(&state.game, &mut simulator)?;
    tracing::debug!(
        assets = round.assets.len(),
        duration = round.duration,
        "Round generated"
    );
    Ok(Json(round))
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SubmitScoreResponse {
    pub success: bool,
    pub score: f64,
}

/// `POST /api/game/submit`
pub async fn submit_score(
    State(state): State<AppState>,
    payload: Result<Json<GameResult>, JsonRejection>,
) -> ApiResult<Json<SubmitScoreResponse>> {
    let Json(mut result) = payload.map_err(|e| {
        tracing::error!(error = %e, "Failed to decode request");
        ApiError::BadRequest("Invalid request".into())
    })?;

    if !result.has_valid_username() {
        return Err(ApiError::BadRequest("Invalid username".into()));
    }

    result.score = calculate_score(
        result.final_balance,
        state.game.start_balance,
        result.trades_count,
    )?;

    let store = state.store.clone();
    let to_save = result.clone();
    tokio::task::spawn_blocking(move || store.save_score(&to_save))
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Score save task failed");
            ApiError::Internal("Failed to save score".into())
        })?
        .map_err(|e| {
            tracing::error!(error = %e, "Failed to save score");
            ApiError::Internal("Failed to save score".into())
        })?;

    Ok(Json(SubmitScoreResponse {
        success: true,
        score: result.score,
    }))
}

#[derive(Debug, Default, Deserialize)]
pub struct LeaderboardParams {
    /// Kept as text so a bad value falls back to the default instead of a 400.
    pub limit: Option<String>,
}

/// `GET /api/leaderboard?limit=N`
pub async fn leaderboard(
    State(state): State<AppState>,
    Query(params): Query<LeaderboardParams>,
) -> ApiResult<Json<Vec<LeaderboardEntry>>> {
    let limit = leaderboard_limit(params.limit.as_deref());
    let store = state.store.clone();
    let scores = tokio::task::spawn_blocking(move || store.top_scores(limit))
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Leaderboard task failed");
            ApiError::Internal("Failed to get leaderboard".into())
        })?
        .map_err(|e| {
            tracing::error!(error = %e, "Failed to get leaderboard");
            ApiError::Internal("Failed to get leaderboard".into())
        })?;
    Ok(Json(scores))
}

pub const BANNER: &str = "Crypto Rush API Server is running\nAPI endpoints:\n- GET|POST /api/game/start\n- POST /api/game/submit\n- GET /api/leaderboard";

/// `GET /` when no static client directory is available.
pub async fn banner() -> &'static str {
    BANNER
}
