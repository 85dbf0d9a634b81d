use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::routing::get;
use axum::Router;
use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::SeedableRng;

use neo_scope::feed::{FeedClient, FeedError, FeedWindow};
use neo_scope::session::Session;

const FEED_FIXTURE: &str = include_str!("data/feed.json");

async fn spawn_server(router: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("ephemeral port should bind");
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}

fn client_for(addr: SocketAddr, timeout: Duration) -> FeedClient {
    FeedClient::new(
        format!("http://{addr}/feed"),
        "TEST_KEY".to_string(),
        timeout,
    )
    .expect("client should build")
}

fn window() -> FeedWindow {
    FeedWindow::new(
        NaiveDate::from_ymd_opt(2026, 8, 4).unwrap(),
        NaiveDate::from_ymd_opt(2026, 8, 5).unwrap(),
    )
}

#[tokio::test]
async fn fetch_parses_a_success_payload() {
    let router = Router::new().route(
        "/feed",
        get(|| async { ([(header::CONTENT_TYPE, "application/json")], FEED_FIXTURE) }),
    );
    let addr = spawn_server(router).await;

    let client = client_for(addr, Duration::from_secs(5));
    let feed = client.fetch(&window()).await.expect("fetch should succeed");
    assert_eq!(feed.entry_count(), 5);
}

#[tokio::test]
async fn server_error_maps_to_unavailable() {
    let router = Router::new().route("/feed", get(|| async { StatusCode::INTERNAL_SERVER_ERROR }));
    let addr = spawn_server(router).await;

    let client = client_for(addr, Duration::from_secs(5));
    let err = client.fetch(&window()).await.unwrap_err();
    assert!(err.is_unavailable());
    match err {
        FeedError::Unavailable(status) => assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR),
        other => panic!("expected Unavailable, got {other}"),
    }
}

#[tokio::test]
async fn slow_upstream_times_out_as_transport_error() {
    let router = Router::new().route(
        "/feed",
        get(|| async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            StatusCode::OK
        }),
    );
    let addr = spawn_server(router).await;

    let client = client_for(addr, Duration::from_millis(200));
    let err = client.fetch(&window()).await.unwrap_err();
    match err {
        FeedError::Transport(e) => assert!(e.is_timeout()),
        other => panic!("expected Transport, got {other}"),
    }
}

#[tokio::test]
async fn repeated_window_is_served_from_cache() {
    let hits = Arc::new(AtomicUsize::new(0));
    let router = Router::new()
        .route(
            "/feed",
            get(|State(hits): State<Arc<AtomicUsize>>| async move {
                hits.fetch_add(1, Ordering::SeqCst);
                ([(header::CONTENT_TYPE, "application/json")], FEED_FIXTURE)
            }),
        )
        .with_state(Arc::clone(&hits));
    let addr = spawn_server(router).await;

    let client = client_for(addr, Duration::from_secs(5));
    let mut session = Session::new(client);
    let mut rng = StdRng::seed_from_u64(1);

    let first = session
        .render(window(), 1.0, &mut rng)
        .await
        .expect("first render should fetch");
    let second = session
        .render(window(), 1.0, &mut rng)
        .await
        .expect("second render should reuse the cached payload");

    assert_eq!(hits.load(Ordering::SeqCst), 1);
    assert_eq!(first.records.len(), 4);
    assert_eq!(second.records.len(), first.records.len());
}

#[tokio::test]
async fn feed_failure_aborts_the_render_pass() {
    let router = Router::new().route("/feed", get(|| async { StatusCode::BAD_GATEWAY }));
    let addr = spawn_server(router).await;

    let client = client_for(addr, Duration::from_secs(5));
    let mut session = Session::new(client);
    let mut rng = StdRng::seed_from_u64(1);

    let err = session.render(window(), 1.0, &mut rng).await.unwrap_err();
    assert!(err.is_unavailable());
}
