//! In-process stand-in for the catalog API, served by axum on an ephemeral port.

#![allow(dead_code)]

use std::{
    collections::{HashMap, HashSet},
    net::SocketAddr,
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
    time::Duration,
};

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde_json::{Value, json};
use tokio::time::sleep;
use tunechart::catalog::Catalog;

/// Track id answered with an in-band API error.
pub const UNKNOWN_TRACK_ID: u64 = 404404;
/// Track id answered with HTTP 500.
pub const BROKEN_TRACK_ID: u64 = 500;
/// Track id answered with a body that is not JSON.
pub const GARBAGE_TRACK_ID: u64 = 888;
/// Track id answered after a long delay.
pub const SLOW_TRACK_ID: u64 = 999;
/// Track id whose payload has no preview and no duration.
pub const NO_PREVIEW_TRACK_ID: u64 = 777;

/// Artist without a `tracklist` field.
pub const ARTIST_WITHOUT_TRACKLIST: u64 = 2;
/// Artist whose track list URL fails.
pub const ARTIST_WITH_BROKEN_TRACKLIST: u64 = 3;

/// Search queries starting with this get hits without an `album`.
pub const COVERLESS_QUERY: &str = "coverless";

pub const TOP_TRACK_COUNT: u64 = 10;
pub const SEARCH_TOTAL: u64 = 250;

#[derive(Default)]
pub struct Upstream {
    base_url: String,
    cover_delay: Duration,
    failing_covers: HashSet<u64>,
    pub track_calls: AtomicUsize,
    pub search_calls: AtomicUsize,
    in_flight: AtomicUsize,
    pub max_in_flight: AtomicUsize,
}

pub struct FakeCatalog {
    pub base_url: String,
    pub upstream: Arc<Upstream>,
}

impl FakeCatalog {
    pub fn catalog(&self, fanout: usize) -> Catalog {
        Catalog::new(&self.base_url, Duration::from_secs(5), fanout).expect("catalog")
    }

    pub fn catalog_with_timeout(&self, timeout: Duration) -> Catalog {
        Catalog::new(&self.base_url, timeout, 8).expect("catalog")
    }

    pub fn track_calls(&self) -> usize {
        self.upstream.track_calls.load(Ordering::SeqCst)
    }

    pub fn search_calls(&self) -> usize {
        self.upstream.search_calls.load(Ordering::SeqCst)
    }

    pub fn max_in_flight(&self) -> usize {
        self.upstream.max_in_flight.load(Ordering::SeqCst)
    }
}

pub async fn spawn_upstream() -> FakeCatalog {
    spawn_upstream_with(Duration::ZERO, HashSet::new()).await
}

pub async fn spawn_upstream_with(cover_delay: Duration, failing_covers: HashSet<u64>) -> FakeCatalog {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind fake upstream");
    let addr = listener.local_addr().expect("local addr");
    let base_url = format!("http://{}", addr);

    let upstream = Arc::new(Upstream {
        base_url: base_url.clone(),
        cover_delay,
        failing_covers,
        ..Default::default()
    });

    let app = Router::new()
        .route("/chart", get(chart))
        .route("/track/{id}", get(track))
        .route("/artist/{id}", get(artist))
        .route("/artist/{id}/top", get(artist_top))
        .route("/broken-tracklist", get(broken))
        .route("/search", get(search))
        .route("/search/track", get(search_track))
        .with_state(Arc::clone(&upstream));

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("fake upstream");
    });

    FakeCatalog { base_url, upstream }
}

/// A base URL nothing listens on.
pub fn refused_base_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr: SocketAddr = listener.local_addr().expect("local addr");
    drop(listener);
    format!("http://{}", addr)
}

async fn chart() -> Json<Value> {
    let artists: Vec<Value> = (1..=10)
        .map(|i| {
            json!({
                "id": 1000 + i,
                "name": format!("Artist {}", i),
                "picture_medium": format!("https://pictures.test/{}.jpg", 1000 + i),
                "type": "artist"
            })
        })
        .collect();

    let tracks: Vec<Value> = (1..=18)
        .map(|i| {
            json!({
                "id": i,
                "title": format!("Track {}", i),
                "duration": 180 + i,
                "artist": {"id": 1000 + i, "name": format!("Artist {}", i)},
                "album": {"cover_medium": format!("https://covers.test/{}.jpg", i)}
            })
        })
        .collect();

    Json(json!({
        "tracks": {"data": tracks, "total": 18},
        "artists": {"data": artists, "total": 10}
    }))
}

async fn track(State(upstream): State<Arc<Upstream>>, Path(id): Path<u64>) -> Response {
    upstream.track_calls.fetch_add(1, Ordering::SeqCst);

    match id {
        UNKNOWN_TRACK_ID => {
            return Json(json!({
                "error": {"type": "DataException", "message": "no data", "code": 800}
            }))
            .into_response();
        }
        BROKEN_TRACK_ID => return StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        GARBAGE_TRACK_ID => return "<html>definitely not json</html>".into_response(),
        SLOW_TRACK_ID => sleep(Duration::from_secs(3)).await,
        NO_PREVIEW_TRACK_ID => {
            return Json(json!({
                "id": id,
                "title": "Imagine",
                "artist": {"name": "John Lennon"},
                "album": {"cover_medium": "https://covers.test/777.jpg"}
            }))
            .into_response();
        }
        _ => {}
    }

    let now = upstream.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
    upstream.max_in_flight.fetch_max(now, Ordering::SeqCst);
    sleep(upstream.cover_delay).await;
    upstream.in_flight.fetch_sub(1, Ordering::SeqCst);

    if upstream.failing_covers.contains(&id) {
        return StatusCode::SERVICE_UNAVAILABLE.into_response();
    }

    Json(json!({
        "id": id,
        "title": format!("Track {}", id),
        "duration": 3661,
        "preview": format!("https://previews.test/{}.mp3", id),
        "artist": {"id": 27, "name": "Fake Artist"},
        "album": {"cover_medium": format!("https://covers.test/{}.jpg", id)}
    }))
    .into_response()
}

async fn artist(State(upstream): State<Arc<Upstream>>, Path(id): Path<u64>) -> Json<Value> {
    let mut body = json!({
        "id": id,
        "name": "Fake Artist",
        "nb_fan": 12345,
        "picture_medium": "https://pictures.test/artist.jpg"
    });

    let tracklist = match id {
        ARTIST_WITHOUT_TRACKLIST => None,
        ARTIST_WITH_BROKEN_TRACKLIST => Some(format!("{}/broken-tracklist", upstream.base_url)),
        _ => Some(format!("{}/artist/{}/top?limit=50", upstream.base_url, id)),
    };
    if let Some(url) = tracklist {
        body["tracklist"] = json!(url);
    }

    Json(body)
}

async fn artist_top() -> Json<Value> {
    let data: Vec<Value> = (0..TOP_TRACK_COUNT)
        .map(|i| {
            json!({
                "id": 100 + i,
                "title": format!("Hit {}", i),
                "duration": 185,
                "rank": 900_000 - i * 1000
            })
        })
        .collect();

    Json(json!({"data": data, "total": TOP_TRACK_COUNT}))
}

async fn broken() -> StatusCode {
    StatusCode::INTERNAL_SERVER_ERROR
}

async fn search(
    State(upstream): State<Arc<Upstream>>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<Value> {
    upstream.search_calls.fetch_add(1, Ordering::SeqCst);

    let limit: u64 = params
        .get("limit")
        .and_then(|l| l.parse().ok())
        .unwrap_or(25)
        .min(100);
    let query = params.get("q").cloned().unwrap_or_default();

    let data: Vec<Value> = (0..limit)
        .map(|i| {
            let mut hit = json!({
                "id": 5000 + i,
                "title": format!("{} #{}", query, i),
                "duration": 60 + i,
                "artist": {"name": "Search Artist"}
            });
            if !query.starts_with(COVERLESS_QUERY) {
                hit["album"] = json!({"cover_medium": format!("https://covers.test/{}.jpg", 5000 + i)});
            }
            hit
        })
        .collect();

    Json(json!({"data": data, "total": SEARCH_TOTAL}))
}

async fn search_track(
    State(upstream): State<Arc<Upstream>>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<Value> {
    upstream.search_calls.fetch_add(1, Ordering::SeqCst);

    let query = params.get("q").cloned().unwrap_or_default();
    if query.contains("nothing") {
        return Json(json!({"data": [], "total": 0}));
    }

    Json(json!({
        "data": [{
            "id": 1,
            "title": query,
            "preview": "https://previews.test/search.mp3",
            "duration": 187
        }],
        "total": 1
    }))
}
