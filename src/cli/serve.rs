use super::catalog;
use crate::{
    config, error,
    management::{AccountManager, SessionManager},
    server::{AppState, start_web_server},
    success, warning,
};

/// Starts the web front end and blocks until it stops.
///
/// With `open`, the index page is opened in the default browser once the
/// server task is running.
pub async fn serve(open: bool) {
    let accounts = match AccountManager::load(config::accounts_path()).await {
        Ok(accounts) => accounts,
        Err(e) => error!("Cannot load accounts. Err: {}", e),
    };
    success!("Loaded {} account(s)", accounts.count());

    let state = AppState::new(catalog(), accounts, SessionManager::new(config::session_ttl()));
    let server = tokio::spawn(start_web_server(state));

    if open {
        let url = format!("http://{}/", config::server_addr());
        if webbrowser::open(&url).is_err() {
            warning!(
                "Failed to open browser. Please navigate to the following URL manually:\n{}",
                url
            )
        }
    }

    match server.await {
        Ok(Ok(())) => {}
        Ok(Err(e)) => error!("Web server stopped. Err: {}", e),
        Err(e) => error!("Web server task failed. Err: {}", e),
    }
}
