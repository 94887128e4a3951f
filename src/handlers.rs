use crate::errors::AppError;
use crate::models::{StatusResponse, WaterRequest, WaterResponse};
use crate::relay::{MAX_DURATION_SECS, MIN_DURATION_SECS};
use crate::state::AppState;
use crate::tracker::relative_time_label;
use crate::ui::render_index;
use axum::{extract::State, response::Html, Json};
use chrono::Local;
use serde_json::json;
use std::sync::atomic::Ordering;
use tracing::{error, info};

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let now = Local::now();
    let mut data = state.data.lock().await;
    data.refresh(now);
    let relative = data
        .last_watered
        .map(|last| relative_time_label(last, now));
    Html(render_index(data.daily_count, relative.as_deref()))
}

pub async fn water(
    State(state): State<AppState>,
    Json(payload): Json<WaterRequest>,
) -> Result<Json<WaterResponse>, AppError> {
    let duration = payload.duration.unwrap_or(state.default_duration_secs);
    if !(MIN_DURATION_SECS..=MAX_DURATION_SECS).contains(&duration) {
        return Err(AppError::bad_request(format!(
            "watering duration must be between {MIN_DURATION_SECS} and {MAX_DURATION_SECS} seconds"
        )));
    }

    // One watering at a time; a click while in flight is a no-op.
    if state.watering.swap(true, Ordering::SeqCst) {
        return Ok(Json(WaterResponse {
            success: false,
            message: "already watering".to_string(),
        }));
    }

    info!("watering for {duration}s");
    let result = state.relay.run(duration).await;
    state.watering.store(false, Ordering::SeqCst);

    match result {
        Ok(upstream_message) => {
            let mut data = state.data.lock().await;
            data.record_watering(Local::now());

            let message = if upstream_message.is_empty() {
                "watering complete".to_string()
            } else {
                upstream_message
            };
            Ok(Json(WaterResponse {
                success: true,
                message,
            }))
        }
        Err(err) => {
            error!("relay call failed: {err}");
            Err(AppError::upstream("failed to reach the watering device"))
        }
    }
}

pub async fn status(State(state): State<AppState>) -> Result<Json<StatusResponse>, AppError> {
    let now = Local::now();
    let mut data = state.data.lock().await;
    data.refresh(now);

    Ok(Json(StatusResponse {
        is_watering: state.watering.load(Ordering::SeqCst),
        last_watered: data.last_watered.map(|last| last.to_rfc3339()),
        last_watered_relative: data
            .last_watered
            .map(|last| relative_time_label(last, now)),
        daily_count: data.daily_count,
        mock_mode: state.relay.is_mock(),
    }))
}

pub async fn ping(State(state): State<AppState>) -> Result<Json<serde_json::Value>, AppError> {
    match state.relay.ping().await {
        Ok(pong) => Ok(Json(json!({ "pong": pong }))),
        Err(err) => {
            error!("ping failed: {err}");
            Err(AppError::upstream("failed to reach the watering device"))
        }
    }
}
