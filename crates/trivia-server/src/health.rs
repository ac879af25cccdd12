use axum::Json;
use axum::extract::State;
use serde::Serialize;

use trivia_core::leaderboard::LeaderboardStats;

use crate::state::AppState;

/// Structured health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub leaderboards: LeaderboardStats,
}

/// Structured health check endpoint. Returns server status and per-tier
/// entry counts as JSON.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let leaderboards = state.leaderboards.read().await.stats();

    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        leaderboards,
    })
}
