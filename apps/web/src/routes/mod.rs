pub mod auth;
pub mod health;
pub mod pages;
pub mod resume;

use axum::{extract::DefaultBodyLimit, middleware, routing::get, Router};

use crate::session::{guard, layer};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Gated routes first; the guard layer only wraps what came before it.
        .route("/dashboard", get(auth::dashboard))
        .route_layer(middleware::from_fn(guard::require_login))
        // Public pages
        .route("/", get(pages::home))
        .route("/about", get(pages::about))
        .route("/portfolio", get(pages::portfolio))
        .route("/project/:project_id", get(pages::project_detail))
        .route(
            "/contact",
            get(pages::contact_page).post(pages::contact_submit),
        )
        .route("/skills", get(pages::skills))
        .route("/services", get(pages::services))
        .route("/login", get(auth::login_page).post(auth::login_submit))
        .route("/logout", get(auth::logout))
        .route("/feedback", get(pages::feedback_page).post(pages::feedback_submit))
        // Resume + uploads
        .route(
            "/resume",
            get(resume::resume_page).post(resume::upload_resume),
        )
        .route("/download/:filename", get(resume::download))
        .route("/api/resume", get(resume::api_resume))
        .route("/download_resume", get(resume::download_resume))
        .route("/health", get(health::health_handler))
        .fallback(pages::not_found)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            layer::attach_session,
        ))
        .layer(DefaultBodyLimit::max(state.config.max_content_length))
        .with_state(state)
}
