use axum::{
    Form,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::Deserialize;

use super::{CurrentUser, SESSION_COOKIE, views};
use crate::{server::AppState, types::Session, warning};

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct SignupForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub password2: String,
}

fn session_cookie(session: Session) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, session.token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build()
}

pub async fn login_form() -> Html<String> {
    Html(views::login_page(None))
}

pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<LoginForm>,
) -> Response {
    let user = state
        .accounts
        .lock()
        .await
        .authenticate(form.username.trim(), &form.password);

    match user {
        Some(user) => {
            let session = state.sessions.lock().await.login(&user);
            (jar.add(session_cookie(session)), Redirect::to("/")).into_response()
        }
        None => (
            StatusCode::UNAUTHORIZED,
            Html(views::login_page(Some(views::INVALID_CREDENTIALS))),
        )
            .into_response(),
    }
}

pub async fn signup_form() -> Html<String> {
    Html(views::signup_page(None))
}

/// Creates an account and logs the new user in.
pub async fn signup(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<SignupForm>,
) -> Response {
    let registered = state
        .accounts
        .lock()
        .await
        .register(&form.username, &form.email, &form.password, &form.password2)
        .await;

    match registered {
        Ok(user) => {
            let session = state.sessions.lock().await.login(&user);
            (jar.add(session_cookie(session)), Redirect::to("/")).into_response()
        }
        Err(e) => {
            warning!("Signup of {:?} refused: {}", form.username, e);
            (
                StatusCode::BAD_REQUEST,
                Html(views::signup_page(Some(&e.to_string()))),
            )
                .into_response()
        }
    }
}

pub async fn logout(State(state): State<AppState>, current: CurrentUser, jar: CookieJar) -> Response {
    state.sessions.lock().await.logout(&current.token);
    let jar = jar.remove(Cookie::build(SESSION_COOKIE).path("/"));
    (jar, Redirect::to("/login")).into_response()
}
