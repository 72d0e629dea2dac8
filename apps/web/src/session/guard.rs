//! Login gate: an explicit middleware stage in front of protected routes.
//! Inspects the session and either forwards the request or short-circuits
//! to the login page with a notice.

use axum::{
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use tracing::warn;

use crate::session::flash::FlashLevel;
use crate::session::store::Session;

pub async fn require_login(request: Request, next: Next) -> Response {
    let Some(session) = request.extensions().get::<Session>().cloned() else {
        // Session middleware not in front of this route; fail closed.
        warn!("Login gate hit without a session layer");
        return Redirect::to("/login").into_response();
    };

    if session.user().await.is_some() {
        return next.run(request).await;
    }

    session
        .flash(FlashLevel::Warning, "Please login first!")
        .await;
    Redirect::to("/login").into_response()
}
