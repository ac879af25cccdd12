use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::response::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use trivia_core::{LeaderboardView, QuestionCount, Submission};

use crate::error::AppError;
use crate::state::AppState;

/// Response for an accepted submission.
#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub success: bool,
}

/// POST /submit — validate a score and record it in its tier.
///
/// The body is taken as loose JSON so that type errors, a malformed body and
/// a disallowed tier all produce the same `Invalid data` rejection.
pub async fn submit_score(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<SubmitResponse>, AppError> {
    let Json(body) = body.map_err(|e| {
        tracing::debug!(error = %e, "Unreadable submission body");
        AppError::InvalidData
    })?;

    let submission = Submission::parse(&body).map_err(|e| {
        tracing::debug!(reason = %e, "Submission rejected");
        AppError::InvalidData
    })?;

    let tier = submission.question_count;
    let rank = {
        let mut boards = state.leaderboards.write().await;
        boards.submit(submission, chrono::Utc::now())
    };
    tracing::info!(%tier, ?rank, "Score submitted");

    Ok(Json(SubmitResponse { success: true }))
}

/// Query string for the leaderboard read.
#[derive(Debug, Default, Deserialize)]
pub struct LeaderboardQuery {
    #[serde(rename = "questionCount")]
    pub question_count: Option<String>,
}

impl LeaderboardQuery {
    /// The requested tier, if the parameter names an allowed one.
    pub fn tier(&self) -> Option<QuestionCount> {
        self.question_count.as_deref()?.parse().ok()
    }
}

/// GET /leaderboard — one tier's ranking, or every tier when the
/// `questionCount` parameter is absent or not an allowed tier.
pub async fn get_leaderboard(
    State(state): State<AppState>,
    query: Result<Query<LeaderboardQuery>, QueryRejection>,
) -> Json<LeaderboardView> {
    let tier = match query {
        Ok(Query(q)) => q.tier(),
        Err(e) => {
            tracing::debug!(error = %e, "Unreadable leaderboard query, returning all tiers");
            None
        },
    };
    let boards = state.leaderboards.read().await;
    Json(boards.view(tier))
}
