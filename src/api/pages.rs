use axum::{
    Form,
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use serde::Deserialize;

use super::{CurrentUser, views};
use crate::{
    catalog::defaults::{INDEX_TRACK_COUNT, SEARCH_LIMIT},
    failure,
    server::AppState,
};

#[derive(Debug, Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    pub search_query: String,
}

pub async fn index(State(state): State<AppState>, current: CurrentUser) -> Html<String> {
    let (artists, tracks) = tokio::join!(
        state.catalog.fetch_top_artists(),
        state.catalog.fetch_top_tracks(INDEX_TRACK_COUNT)
    );

    Html(views::index_page(&current.user, &artists, &tracks))
}

pub async fn music(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<u64>,
) -> Response {
    match state.catalog.fetch_track_by_id(id).await {
        Ok(track) => Html(views::track_page(&current.user, &track)).into_response(),
        Err(e) => {
            failure!("Track {} unavailable: {}", id, e);
            (
                StatusCode::BAD_GATEWAY,
                Html(views::error_page(Some(&current.user), views::TRACK_ERROR_MESSAGE)),
            )
                .into_response()
        }
    }
}

pub async fn profile(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<u64>,
) -> Response {
    match state.catalog.fetch_artist_profile(id).await {
        Ok(profile) => Html(views::profile_page(&current.user, &profile)).into_response(),
        Err(e) => {
            failure!("Artist {} unavailable: {}", id, e);
            (
                StatusCode::BAD_GATEWAY,
                Html(views::error_page(Some(&current.user), views::PROFILE_ERROR_MESSAGE)),
            )
                .into_response()
        }
    }
}

pub async fn search_form(current: CurrentUser) -> Html<String> {
    Html(views::search_page(&current.user, None, None, None))
}

pub async fn search(
    State(state): State<AppState>,
    current: CurrentUser,
    Form(form): Form<SearchForm>,
) -> Html<String> {
    let query = form.search_query.trim();
    let page = match state.catalog.search_tracks(query, SEARCH_LIMIT).await {
        Ok(result) => views::search_page(&current.user, Some(query), Some(&result), None),
        Err(e) => {
            failure!("Search for {:?} failed: {}", query, e);
            views::search_page(
                &current.user,
                Some(query),
                None,
                Some(views::SEARCH_ERROR_MESSAGE),
            )
        }
    };

    Html(page)
}
