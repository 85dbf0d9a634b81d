use utoipa::OpenApi;

use crate::catalog::BodyRecord;
use crate::scene::{CameraFrame, EyePosition, PlotPoint, Scene};

use super::api::error::ErrorResponse;
use super::api::neo::{ObserveQuery, ObserveResponse};

#[derive(OpenApi)]
#[openapi(
    paths(super::api::neo::observe),
    components(
        schemas(
            ObserveQuery,
            ObserveResponse,
            ErrorResponse,
            BodyRecord,
            Scene,
            PlotPoint,
            CameraFrame,
            EyePosition,
        )
    ),
    info(
        title = "Neo-Scope Observation API",
        description = "API for near-Earth-object observation windows",
        version = "0.1.0"
    ),
    tags(
        (name = "neo", description = "Near-Earth-object observations")
    )
)]
pub struct ApiDoc;
