//! Session middleware: resolves the `sid` cookie into a [`Session`] handle
//! before any handler runs, and sets the cookie on the way out when a new
//! session was started.

use axum::{
    extract::{Request, State},
    http::{header::SET_COOKIE, HeaderValue},
    middleware::Next,
    response::Response,
};
use axum_extra::extract::CookieJar;
use tracing::debug;
use uuid::Uuid;

use crate::state::AppState;

pub const SESSION_COOKIE: &str = "sid";

pub async fn attach_session(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let jar = CookieJar::from_headers(request.headers());
    let claimed = jar
        .get(SESSION_COOKIE)
        .and_then(|c| c.value().parse::<Uuid>().ok());
    let mut known_id = None;
    if let Some(id) = claimed {
        if state.sessions.exists(id).await {
            known_id = Some(id);
        }
    }

    let id = known_id.unwrap_or_else(Uuid::new_v4);
    if known_id.is_none() {
        debug!("Starting session {id}");
    }
    request.extensions_mut().insert(state.sessions.session(id));

    let mut response = next.run(request).await;

    if known_id.is_none() {
        let cookie = format!("{SESSION_COOKIE}={id}; Path=/; HttpOnly; SameSite=Lax");
        if let Ok(value) = HeaderValue::from_str(&cookie) {
            response.headers_mut().append(SET_COOKIE, value);
        }
    }
    response
}
