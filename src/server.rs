use axum::{Router, routing::get};
use std::{net::SocketAddr, str::FromStr, sync::Arc};
use tokio::sync::Mutex;

use crate::{
    Res, api,
    catalog::Catalog,
    config, info,
    management::{AccountManager, SessionManager},
};

/// Shared state of the web server.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub accounts: Arc<Mutex<AccountManager>>,
    pub sessions: Arc<Mutex<SessionManager>>,
}

impl AppState {
    pub fn new(catalog: Catalog, accounts: AccountManager, sessions: SessionManager) -> Self {
        Self {
            catalog: Arc::new(catalog),
            accounts: Arc::new(Mutex::new(accounts)),
            sessions: Arc::new(Mutex::new(sessions)),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(api::index))
        .route("/music/{id}", get(api::music))
        .route("/profile/{id}", get(api::profile))
        .route("/search", get(api::search_form).post(api::search))
        .route("/login", get(api::login_form).post(api::login))
        .route("/signup", get(api::signup_form).post(api::signup))
        .route("/logout", get(api::logout))
        .route("/health", get(api::health))
        .with_state(state)
}

pub async fn start_web_server(state: AppState) -> Res<()> {
    let addr = SocketAddr::from_str(&config::server_addr())
        .map_err(|e| format!("Failed to parse server address: {}", e))?;

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on http://{}", listener.local_addr()?);
    axum::serve(listener, router(state)).await?;
    Ok(())
}
