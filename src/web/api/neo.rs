use axum::{
    extract::{Query, State},
    Json,
};
use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::catalog::BodyRecord;
use crate::feed::FeedWindow;
use crate::scene::Scene;
use crate::web::api::error::{ApiError, ApiResult, ErrorResponse};
use crate::web::server::AppState;

pub const MIN_DAYS: u32 = 1;
pub const MAX_DAYS: u32 = 7;
pub const MIN_ROTATION_SPEED: f64 = 0.1;
pub const MAX_ROTATION_SPEED: f64 = 5.0;

#[derive(Debug, Deserialize, ToSchema)]
pub struct ObserveQuery {
    /// Observation window length in days; defaults to the configured value.
    pub days: Option<u32>,
    /// Camera rotation speed; defaults to the configured value.
    pub rotation_speed: Option<f64>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ObserveResponse {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub body_count: usize,
    pub records: Vec<BodyRecord>,
    pub scene: Scene,
}

#[utoipa::path(
    get,
    path = "/api/neo",
    tag = "neo",
    params(
        ("days" = Option<u32>, Query, description = "Observation window length in days (1-7)"),
        ("rotation_speed" = Option<f64>, Query, description = "Camera rotation speed (0.1-5.0)")
    ),
    responses(
        (status = 200, description = "Window observations and chart scene", body = ObserveResponse),
        (status = 400, description = "Invalid parameters", body = ErrorResponse),
        (status = 502, description = "Upstream feed unavailable", body = ErrorResponse)
    )
)]
pub async fn observe(
    State(state): State<AppState>,
    Query(query): Query<ObserveQuery>,
) -> ApiResult<Json<ObserveResponse>> {
    let days = query.days.unwrap_or(state.config.ui.default_days);
    if !(MIN_DAYS..=MAX_DAYS).contains(&days) {
        return Err(ApiError::Validation(format!(
            "days must be between {} and {}",
            MIN_DAYS, MAX_DAYS
        )));
    }

    let rotation_speed = query
        .rotation_speed
        .unwrap_or(state.config.ui.default_rotation_speed);
    if !(MIN_ROTATION_SPEED..=MAX_ROTATION_SPEED).contains(&rotation_speed) {
        return Err(ApiError::Validation(format!(
            "rotation_speed must be between {} and {}",
            MIN_ROTATION_SPEED, MAX_ROTATION_SPEED
        )));
    }

    let window = FeedWindow::ending_today(days);
    let mut rng = StdRng::from_entropy();

    let mut session = state.session.lock().await;
    let output = session.render(window, rotation_speed, &mut rng).await?;

    Ok(Json(ObserveResponse {
        start_date: output.window.start_date,
        end_date: output.window.end_date,
        body_count: output.records.len(),
        records: output.records,
        scene: output.scene,
    }))
}
