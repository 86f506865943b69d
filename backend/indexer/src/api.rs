//! Axum REST API handlers.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use sqlx::SqlitePool;

use crate::db;
use crate::errors::IndexerError;
use crate::events::EventRecord;
use crate::tally::{self, Tally};

#[derive(Clone)]
pub struct ApiState {
    pub pool: SqlitePool,
    pub candidate_count: u32,
}

// ─────────────────────────────────────────────────────────
// Response shapes
// ─────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct VoterEventsResponse {
    pub voter: String,
    pub has_voted: bool,
    /// Candidates picked in the voter's `voted` event, empty before voting.
    pub candidate_ids: Vec<u32>,
    pub count: usize,
    pub events: Vec<EventRecord>,
}

#[derive(Serialize)]
pub struct AllEventsResponse {
    pub count: usize,
    pub events: Vec<EventRecord>,
}

#[derive(Serialize)]
pub struct TallyResponse {
    #[serde(flatten)]
    pub tally: Tally,
    pub ranking: Vec<(u32, u64)>,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

fn internal_error(e: IndexerError) -> Response {
    tracing::error!("API query failed: {e}");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: e.to_string(),
        }),
    )
        .into_response()
}

// ─────────────────────────────────────────────────────────
// Handlers
// ─────────────────────────────────────────────────────────

/// `GET /health`
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// `GET /voters/:address/events`
///
/// Returns the indexed `voted` and `transfer` events for one account.
pub async fn get_voter_events(
    State(state): State<Arc<ApiState>>,
    Path(voter): Path<String>,
) -> Response {
    let events = match db::get_events_for_voter(&state.pool, &voter).await {
        Ok(events) => events,
        Err(e) => return internal_error(e),
    };

    let voted_row = events.iter().find(|e| e.event_type == "voted").map(|e| e.id);
    let candidate_ids = match voted_row {
        Some(row) => match db::get_selections(&state.pool, row).await {
            Ok(ids) => ids,
            Err(e) => return internal_error(e),
        },
        None => Vec::new(),
    };

    let count = events.len();
    (
        StatusCode::OK,
        Json(VoterEventsResponse {
            voter,
            has_voted: voted_row.is_some(),
            candidate_ids,
            count,
            events,
        }),
    )
        .into_response()
}

/// `GET /events`
///
/// Returns every indexed campaign event.
pub async fn get_all_events(State(state): State<Arc<ApiState>>) -> Response {
    match db::get_all_events(&state.pool).await {
        Ok(events) => {
            let count = events.len();
            (StatusCode::OK, Json(AllEventsResponse { count, events })).into_response()
        }
        Err(e) => internal_error(e),
    }
}

/// `GET /tally`
///
/// Per-candidate vote counts rebuilt from indexed `voted` events.
pub async fn get_tally(State(state): State<Arc<ApiState>>) -> Response {
    match db::get_tally(&state.pool).await {
        Ok(sparse) => {
            let tally = tally::build(&sparse, state.candidate_count);
            let ranking = tally::ranking(&tally);
            (StatusCode::OK, Json(TallyResponse { tally, ranking })).into_response()
        }
        Err(e) => internal_error(e),
    }
}
