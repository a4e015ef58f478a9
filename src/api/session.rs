use axum::{extract::FromRequestParts, http::request::Parts, response::Redirect};
use axum_extra::extract::cookie::CookieJar;

use crate::{server::AppState, types::User};

pub const SESSION_COOKIE: &str = "tunechart_session";

/// The logged-in user of a request.
///
/// Rejects with a redirect to `/login` when there is no live session.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub user: User,
    pub token: String,
}

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = Redirect;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let Some(token) = jar.get(SESSION_COOKIE).map(|c| c.value().to_string()) else {
            return Err(Redirect::to("/login"));
        };

        let Some(username) = state.sessions.lock().await.username_for(&token) else {
            return Err(Redirect::to("/login"));
        };

        match state.accounts.lock().await.find(&username) {
            Some(user) => Ok(CurrentUser { user, token }),
            None => Err(Redirect::to("/login")),
        }
    }
}
