use axum::{extract::State, response::IntoResponse};

use crate::web::server::AppState;

use super::templates::DashboardTemplate;

pub async fn dashboard(State(state): State<AppState>) -> impl IntoResponse {
    DashboardTemplate {
        default_days: state.config.ui.default_days,
        default_rotation_speed: state.config.ui.default_rotation_speed,
    }
}
