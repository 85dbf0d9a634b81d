use axum::{routing::get, Router};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::feed::FeedClient;
use crate::session::Session;

use super::api::neo as neo_handlers;
use super::api_doc::ApiDoc;
use super::config::Config;
use super::ui::handlers as ui_handlers;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub session: Arc<Mutex<Session>>,
}

pub async fn run_server(config: Config) -> std::io::Result<()> {
    let bind_addr = config.web.bind.clone();

    let client = FeedClient::new(
        config.feed.base_url.clone(),
        config.feed.resolved_api_key(),
        Duration::from_secs(config.feed.timeout_s),
    )
    .map_err(std::io::Error::other)?;

    let state = AppState {
        config: Arc::new(config),
        session: Arc::new(Mutex::new(Session::new(client))),
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        // UI routes
        .route("/", get(ui_handlers::dashboard))
        // Observation API
        .route("/api/neo", get(neo_handlers::observe))
        // Static files
        .nest_service("/static", ServeDir::new("src/web/static"))
        // OpenAPI / Swagger
        .merge(SwaggerUi::new("/swagger-ui").url("/api-doc/openapi.json", ApiDoc::openapi()))
        // Middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    log::info!("Starting server on {}", bind_addr);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app).await
}
