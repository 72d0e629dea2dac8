//! Login, logout, and the gated dashboard.
//!
//! A login succeeds for any non-empty username paired with the configured
//! password. The login gate itself lives in `session::guard`.

use askama::Template;
use axum::{
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
    Extension, Form,
};
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::session::flash::FlashLevel;
use crate::session::store::Session;
use crate::state::AppState;
use crate::views::{DashboardPage, LoginPage, PageContext};

#[derive(Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    /// Present when the checkbox was ticked.
    #[serde(default)]
    pub remember: Option<String>,
}

/// GET /login
pub async fn login_page(
    Extension(session): Extension<Session>,
) -> Result<Html<String>, AppError> {
    let page = LoginPage {
        ctx: PageContext::gather(&session).await,
    };
    Ok(Html(page.render()?))
}

/// POST /login
pub async fn login_submit(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Form(form): Form<LoginForm>,
) -> Result<Response, AppError> {
    if !form.username.is_empty() && form.password == state.config.admin_password {
        let remember = form.remember.is_some();
        session.login(&form.username, remember).await;
        info!("User {} logged in (remember={remember})", form.username);
        session
            .flash(
                FlashLevel::Success,
                format!("Welcome back, {}!", form.username),
            )
            .await;
        return Ok(Redirect::to("/dashboard").into_response());
    }

    session
        .flash(FlashLevel::Danger, "Invalid username or password!")
        .await;
    let page = LoginPage {
        ctx: PageContext::gather(&session).await,
    };
    Ok(Html(page.render()?).into_response())
}

/// GET /dashboard
///
/// Only reachable through the login gate in `session::guard`.
pub async fn dashboard(
    Extension(session): Extension<Session>,
) -> Result<Html<String>, AppError> {
    let user = session.user().await.unwrap_or_default();
    let contacts = session.contacts().await;
    let visits = session.visits().await;
    let page = DashboardPage {
        ctx: PageContext::gather(&session).await,
        user,
        contacts,
        visits,
    };
    Ok(Html(page.render()?))
}

/// GET /logout
pub async fn logout(Extension(session): Extension<Session>) -> Redirect {
    let user = session.reset().await.unwrap_or_else(|| "User".to_string());
    info!("User {user} logged out");
    session
        .flash(
            FlashLevel::Info,
            format!("Goodbye, {user}! You have been logged out."),
        )
        .await;
    session
        .flash(FlashLevel::Info, format!("{user} logged out successfully!"))
        .await;
    Redirect::to("/")
}
