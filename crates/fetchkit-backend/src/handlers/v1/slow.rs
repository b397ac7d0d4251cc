use std::sync::Arc;
use std::time::Duration;

use axum::{
    Json,
    extract::{Query, State},
};
use fetchkit::data::Delayed;
use fetchkit::{log, serde::Deserialize};

use crate::AppState;

const DEFAULT_DELAY_MS: u64 = 1_000;

#[derive(Debug, Deserialize)]
#[serde(crate = "fetchkit::serde")]
pub struct SlowQuery {
    pub ms: Option<u64>,
}

/// Wait before answering, so clients have something to cancel.
pub async fn slow(State(state): State<Arc<AppState>>, Query(query): Query<SlowQuery>) -> Json<Delayed> {
    let waited_ms = query
        .ms
        .unwrap_or(DEFAULT_DELAY_MS)
        .min(state.config.max_delay_ms);

    log::debug!(waited_ms, "delaying response");
    tokio::time::sleep(Duration::from_millis(waited_ms)).await;

    Json(Delayed { waited_ms })
}
