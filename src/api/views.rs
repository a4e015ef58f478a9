//! HTML rendering of the pages. Every interpolated value goes through [`escape`].

use std::fmt::Write;

use crate::{
    catalog::defaults::INDEX_ROW_SIZE,
    types::{ArtistProfile, ArtistSummary, SearchResult, TrackDetail, TrackSummary, User},
};

pub const TRACK_ERROR_MESSAGE: &str = "An error occurred while fetching track metadata.";
pub const PROFILE_ERROR_MESSAGE: &str = "An error occurred while fetching the artist profile.";
pub const SEARCH_ERROR_MESSAGE: &str = "An error occurred while processing your request.";
pub const INVALID_CREDENTIALS: &str = "Invalid Credentials";

pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

fn layout(title: &str, user: Option<&User>, body: &str) -> String {
    let nav = match user {
        Some(user) => format!(
            r#"<nav><a href="/">Home</a> <a href="/search">Search</a> <span>{}</span> <a href="/logout">Log out</a></nav>"#,
            escape(&user.username)
        ),
        None => r#"<nav><a href="/login">Log in</a> <a href="/signup">Sign up</a></nav>"#.to_string(),
    };

    format!(
        "<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\"><title>{} - Tunechart</title></head>\n<body>\n{}\n<main>\n{}\n</main>\n</body>\n</html>\n",
        escape(title),
        nav,
        body
    )
}

fn messages(message: Option<&str>) -> String {
    message
        .map(|m| format!(r#"<p class="message">{}</p>"#, escape(m)))
        .unwrap_or_default()
}

fn track_card(track: &TrackSummary) -> String {
    format!(
        r#"<li><a href="/music/{id}"><img src="{cover}" alt=""><span>{title}</span></a> <small>{artist}</small></li>"#,
        id = track.id,
        cover = escape(&track.cover_url),
        title = escape(&track.title),
        artist = escape(&track.artist_name),
    )
}

pub fn index_page(user: &User, artists: &[ArtistSummary], tracks: &[TrackSummary]) -> String {
    let mut body = String::from("<h1>Top artists</h1>\n<ul class=\"artists\">\n");
    for artist in artists {
        let _ = writeln!(
            body,
            r#"<li><a href="/profile/{}"><img src="{}" alt=""><span>{}</span></a></li>"#,
            artist.id,
            escape(&artist.avatar_url),
            escape(&artist.name)
        );
    }
    body.push_str("</ul>\n<h1>Top tracks</h1>\n");

    for row in tracks.chunks(INDEX_ROW_SIZE) {
        body.push_str("<ul class=\"tracks\">\n");
        for track in row {
            body.push_str(&track_card(track));
            body.push('\n');
        }
        body.push_str("</ul>\n");
    }

    layout("Home", Some(user), &body)
}

pub fn track_page(user: &User, track: &TrackDetail) -> String {
    let audio = if track.preview_url.is_empty() {
        "<p>No preview available.</p>".to_string()
    } else {
        format!(
            r#"<audio controls src="{}"></audio>"#,
            escape(&track.preview_url)
        )
    };

    let body = format!(
        r#"<img src="{cover}" alt="">
<h1>{title}</h1>
<h2>{artist}</h2>
{audio}
<p class="duration">{duration}</p>"#,
        cover = escape(&track.cover_url),
        title = escape(&track.title),
        artist = escape(&track.artist_name),
        audio = audio,
        duration = escape(&track.duration_text),
    );

    layout(&track.title, Some(user), &body)
}

pub fn profile_page(user: &User, profile: &ArtistProfile) -> String {
    let mut body = format!(
        r#"<img src="{}" alt="">
<h1>{}</h1>
<p>{} monthly listeners</p>
<h2>Popular</h2>
<ol>
"#,
        escape(&profile.header_url),
        escape(&profile.name),
        profile.monthly_listeners
    );

    for track in &profile.top_tracks {
        let _ = writeln!(
            body,
            r#"<li><a href="/music/{}"><img src="{}" alt=""><span>{}</span></a> <small>{}</small> <small>{} plays</small></li>"#,
            track.id,
            escape(&track.cover_url),
            escape(&track.title),
            escape(&track.duration_text),
            track.play_count
        );
    }
    body.push_str("</ol>");

    layout(&profile.name, Some(user), &body)
}

pub fn search_page(
    user: &User,
    query: Option<&str>,
    result: Option<&SearchResult>,
    error: Option<&str>,
) -> String {
    let mut body = format!(
        r#"<form method="post" action="/search">
<input type="text" name="search_query" value="{}">
<button type="submit">Search</button>
</form>
"#,
        escape(query.unwrap_or_default())
    );
    body.push_str(&messages(error));

    if let Some(result) = result {
        let _ = writeln!(body, "<p>{} results</p>\n<ol>", result.total_count);
        for hit in &result.tracks {
            let _ = writeln!(
                body,
                r#"<li><a href="/music/{}"><img src="{}" alt=""><span>{}</span></a> <small>{}</small> <small>{}</small></li>"#,
                hit.track.id,
                escape(&hit.track.cover_url),
                escape(&hit.track.title),
                escape(&hit.track.artist_name),
                escape(&hit.duration_text)
            );
        }
        body.push_str("</ol>");
    }

    layout("Search", Some(user), &body)
}

pub fn error_page(user: Option<&User>, message: &str) -> String {
    let body = format!(
        "<h1>Something went wrong</h1>\n{}",
        messages(Some(message))
    );
    layout("Error", user, &body)
}

pub fn login_page(message: Option<&str>) -> String {
    let body = format!(
        r#"<h1>Log in</h1>
{}
<form method="post" action="/login">
<input type="text" name="username" placeholder="Username">
<input type="password" name="password" placeholder="Password">
<button type="submit">Log in</button>
</form>"#,
        messages(message)
    );
    layout("Log in", None, &body)
}

pub fn signup_page(message: Option<&str>) -> String {
    let body = format!(
        r#"<h1>Sign up</h1>
{}
<form method="post" action="/signup">
<input type="email" name="email" placeholder="Email">
<input type="text" name="username" placeholder="Username">
<input type="password" name="password" placeholder="Password">
<input type="password" name="password2" placeholder="Repeat password">
<button type="submit">Sign up</button>
</form>"#,
        messages(message)
    );
    layout("Sign up", None, &body)
}
