use std::sync::Arc;

use crate::config::Config;
use crate::resume::record::ResumeRecord;
use crate::session::store::SessionStore;
use crate::uploads::UploadRegistry;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// The resume record, loaded once at startup and read-only afterwards.
    pub resume: Arc<ResumeRecord>,
    /// Per-client session state behind a narrow backend seam.
    pub sessions: SessionStore,
    /// Validates and persists uploaded files.
    pub uploads: UploadRegistry,
    pub config: Config,
}
