//! Handlers for the content pages and the two form pages (contact,
//! feedback). Recoverable form problems become flash notices plus a
//! redirect; only infrastructure failures surface as `AppError`.

use askama::Template;
use axum::{
    extract::{Multipart, Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Extension, Form,
};
use chrono::Local;
use serde::Deserialize;

use crate::content::{find_project, PORTFOLIO_ITEMS, SERVICES};
use crate::errors::AppError;
use crate::session::flash::FlashLevel;
use crate::session::store::{ContactMessage, FeedbackEntry, Session};
use crate::state::AppState;
use crate::uploads::UploadError;
use crate::views::{
    skill_rows, AboutPage, ContactPage, FeedbackPage, HomePage, NotFoundPage, PageContext,
    PortfolioPage, ProjectDetailPage, ServicesPage, SkillsPage,
};

const DISPLAY_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Deserialize)]
pub struct HomeQuery {
    #[serde(default)]
    pub message: Option<String>,
}

/// GET /
pub async fn home(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Query(params): Query<HomeQuery>,
) -> Result<Html<String>, AppError> {
    session.bump_visits().await;

    if let Some(message) = params.message.filter(|m| !m.is_empty()) {
        session.flash(FlashLevel::Info, message).await;
    }

    let featured = if PORTFOLIO_ITEMS.len() > 3 {
        &PORTFOLIO_ITEMS[..3]
    } else {
        PORTFOLIO_ITEMS
    };
    let page = HomePage {
        ctx: PageContext::gather(&session).await,
        projects: featured,
        skills: skill_rows(&state.resume),
    };
    Ok(Html(page.render()?))
}

/// GET /about
pub async fn about(
    Extension(session): Extension<Session>,
) -> Result<Html<String>, AppError> {
    let user_name = session.user().await.unwrap_or_else(|| "Guest".to_string());
    let page = AboutPage {
        ctx: PageContext::gather(&session).await,
        user_name,
    };
    Ok(Html(page.render()?))
}

/// GET /portfolio
pub async fn portfolio(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
) -> Result<Html<String>, AppError> {
    let page = PortfolioPage {
        ctx: PageContext::gather(&session).await,
        projects: PORTFOLIO_ITEMS,
        skills: skill_rows(&state.resume),
    };
    Ok(Html(page.render()?))
}

/// GET /project/:project_id
pub async fn project_detail(
    Extension(session): Extension<Session>,
    Path(project_id): Path<u32>,
) -> Result<Response, AppError> {
    let Some(project) = find_project(project_id) else {
        session
            .flash(FlashLevel::Danger, "Project not found!")
            .await;
        return Ok(Redirect::to("/portfolio").into_response());
    };
    let page = ProjectDetailPage {
        ctx: PageContext::gather(&session).await,
        project,
    };
    Ok(Html(page.render()?).into_response())
}

/// GET /skills
pub async fn skills(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
) -> Result<Html<String>, AppError> {
    let page = SkillsPage {
        ctx: PageContext::gather(&session).await,
        skills: skill_rows(&state.resume),
    };
    Ok(Html(page.render()?))
}

/// GET /services
pub async fn services(
    Extension(session): Extension<Session>,
) -> Result<Html<String>, AppError> {
    let page = ServicesPage {
        ctx: PageContext::gather(&session).await,
        services: SERVICES,
    };
    Ok(Html(page.render()?))
}

/// GET /contact
pub async fn contact_page(
    Extension(session): Extension<Session>,
) -> Result<Html<String>, AppError> {
    let page = ContactPage {
        ctx: PageContext::gather(&session).await,
    };
    Ok(Html(page.render()?))
}

#[derive(Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
}

/// POST /contact
pub async fn contact_submit(
    Extension(session): Extension<Session>,
    Form(form): Form<ContactForm>,
) -> Redirect {
    let required = [&form.name, &form.email, &form.subject, &form.message];
    if required.iter().any(|f| f.is_empty()) {
        session
            .flash(FlashLevel::Danger, "Please fill in all required fields!")
            .await;
        return Redirect::to("/contact");
    }

    let notice = format!(
        "Thank you {}! Your message has been received. I will get back to you soon!",
        form.name
    );
    session
        .add_contact(ContactMessage {
            name: form.name,
            email: form.email,
            phone: form.phone,
            subject: form.subject,
            message: form.message,
            timestamp: Local::now().format(DISPLAY_TIME_FORMAT).to_string(),
        })
        .await;
    session.flash(FlashLevel::Success, notice).await;
    Redirect::to("/contact")
}

/// GET /feedback
pub async fn feedback_page(
    Extension(session): Extension<Session>,
) -> Result<Html<String>, AppError> {
    let page = FeedbackPage {
        ctx: PageContext::gather(&session).await,
    };
    Ok(Html(page.render()?))
}

/// POST /feedback
///
/// Multipart form: `feedback` (required), `rating`, and an optional
/// `attachment` file. An attachment with a disallowed type is skipped
/// without failing the submission.
pub async fn feedback_submit(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    mut multipart: Multipart,
) -> Result<Redirect, AppError> {
    let mut feedback = String::new();
    let mut rating = String::new();
    let mut attachment: Option<(String, bytes::Bytes)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Multipart(e.to_string()))?
    {
        match field.name().unwrap_or("") {
            "feedback" => {
                feedback = field
                    .text()
                    .await
                    .map_err(|e| AppError::Multipart(e.to_string()))?;
            }
            "rating" => {
                rating = field
                    .text()
                    .await
                    .map_err(|e| AppError::Multipart(e.to_string()))?;
            }
            "attachment" => {
                let name = field.file_name().unwrap_or_default().to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Multipart(e.to_string()))?;
                attachment = Some((name, data));
            }
            _ => {
                let _ = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Multipart(e.to_string()))?;
            }
        }
    }

    if feedback.is_empty() {
        session
            .flash(FlashLevel::Danger, "Please provide feedback!")
            .await;
        return Ok(Redirect::to("/feedback"));
    }

    let mut stored_attachment = None;
    if let Some((name, data)) = attachment {
        if !name.is_empty() {
            match state.uploads.store(&name, &data).await {
                Ok(record) => stored_attachment = Some(record.stored_filename),
                Err(UploadError::NoFileSelected) | Err(UploadError::InvalidFileType) => {}
                Err(e) => {
                    session.flash(FlashLevel::Danger, e.notice()).await;
                    return Ok(Redirect::to("/feedback"));
                }
            }
        }
    }

    session
        .add_feedback(FeedbackEntry {
            feedback,
            rating,
            attachment: stored_attachment,
            timestamp: Local::now().format(DISPLAY_TIME_FORMAT).to_string(),
        })
        .await;
    session
        .flash(FlashLevel::Success, "Thank you for your feedback!")
        .await;
    Ok(Redirect::to("/feedback"))
}

/// Fallback for unknown paths.
pub async fn not_found(
    Extension(session): Extension<Session>,
) -> Result<Response, AppError> {
    let page = NotFoundPage {
        ctx: PageContext::gather(&session).await,
    };
    Ok((StatusCode::NOT_FOUND, Html(page.render()?)).into_response())
}
