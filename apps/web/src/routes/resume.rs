//! Resume page, the upload/download pair, and the two resume exports
//! (generated text document, JSON record).

use askama::Template;
use axum::{
    extract::{Multipart, Path, State},
    http::header,
    response::{Html, IntoResponse, Redirect, Response},
    Extension, Json,
};
use bytes::Bytes;

use crate::errors::AppError;
use crate::resume::document::render_plain_text;
use crate::resume::record::ResumeRecord;
use crate::session::flash::FlashLevel;
use crate::session::store::Session;
use crate::state::AppState;
use crate::views::{PageContext, ResumePage};

/// Fixed download name of the generated text resume.
const RESUME_DOWNLOAD_NAME: &str = "resume_Chettimala_Krishna_Kumar.txt";

/// GET /resume
pub async fn resume_page(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
) -> Result<Html<String>, AppError> {
    let page = ResumePage {
        ctx: PageContext::gather(&session).await,
        uploads: session.uploads().await,
        resume: state.resume.clone(),
    };
    Ok(Html(page.render()?))
}

/// POST /resume
///
/// Multipart upload of a `resume_file` field. Every outcome redirects back
/// to the resume page; the registry's error taxonomy maps one-to-one onto
/// flash notices.
pub async fn upload_resume(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    mut multipart: Multipart,
) -> Result<Redirect, AppError> {
    let mut file: Option<(String, Bytes)> = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Multipart(e.to_string()))?
    {
        if field.name() == Some("resume_file") {
            let name = field.file_name().unwrap_or_default().to_string();
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::Multipart(e.to_string()))?;
            file = Some((name, data));
        } else {
            let _ = field
                .bytes()
                .await
                .map_err(|e| AppError::Multipart(e.to_string()))?;
        }
    }

    match file {
        None => {
            session
                .flash(FlashLevel::Danger, "No file selected!")
                .await;
        }
        Some((name, data)) => match state.uploads.store(&name, &data).await {
            Ok(record) => {
                session.add_upload(record).await;
                session
                    .flash(FlashLevel::Success, "Resume uploaded successfully!")
                    .await;
            }
            Err(e) => {
                session.flash(FlashLevel::Danger, e.notice()).await;
            }
        },
    }
    Ok(Redirect::to("/resume"))
}

/// GET /download/:filename
///
/// Streams a stored upload as an attachment, or redirects with a notice
/// when the name is unknown.
pub async fn download(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Path(filename): Path<String>,
) -> Response {
    match state.uploads.open(&filename).await {
        Ok(bytes) => (
            [
                (
                    header::CONTENT_TYPE,
                    "application/octet-stream".to_string(),
                ),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{filename}\""),
                ),
            ],
            bytes,
        )
            .into_response(),
        Err(e) => {
            session.flash(FlashLevel::Danger, e.notice()).await;
            Redirect::to("/resume").into_response()
        }
    }
}

/// GET /api/resume
///
/// The full record for programmatic consumption.
pub async fn api_resume(State(state): State<AppState>) -> Json<ResumeRecord> {
    Json((*state.resume).clone())
}

/// GET /download_resume
///
/// The generated plain-text document, as a fixed-name attachment.
pub async fn download_resume(State(state): State<AppState>) -> Response {
    let body = render_plain_text(&state.resume);
    (
        [
            (
                header::CONTENT_TYPE,
                "text/plain; charset=utf-8".to_string(),
            ),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{RESUME_DOWNLOAD_NAME}\""),
            ),
        ],
        body,
    )
        .into_response()
}
