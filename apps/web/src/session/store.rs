//! Session store and the data it holds.
//!
//! `SessionData` is the per-client state, living for one browsing session.
//! The store hides its backend behind the narrow async [`SessionBackend`]
//! trait so the in-memory map can be swapped for an external cache without
//! touching handlers. Each request owns its session exclusively; the
//! backend lock is store-internal bookkeeping, not cross-request
//! coordination.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::session::flash::{Flash, FlashLevel};
use crate::uploads::UploadRecord;

/// Server-side bound on an ordinary session.
const DEFAULT_TTL_HOURS: i64 = 24;
/// "Remember me" lifetime.
const REMEMBER_TTL_DAYS: i64 = 7;

/// A contact-form submission held in the submitter's session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
    pub timestamp: String,
}

/// A feedback-form submission, optionally referencing a stored attachment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackEntry {
    pub feedback: String,
    pub rating: String,
    pub attachment: Option<String>,
    pub timestamp: String,
}

/// Everything a session carries. Append-only lists are never deduplicated
/// or pruned; they die with the session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionData {
    pub user: Option<String>,
    pub visits: u64,
    pub flashes: Vec<Flash>,
    pub contacts: Vec<ContactMessage>,
    pub uploads: Vec<UploadRecord>,
    pub feedbacks: Vec<FeedbackEntry>,
    pub remember: bool,
    pub expires_at: DateTime<Utc>,
}

impl SessionData {
    fn new() -> Self {
        SessionData {
            user: None,
            visits: 0,
            flashes: Vec::new(),
            contacts: Vec::new(),
            uploads: Vec::new(),
            feedbacks: Vec::new(),
            remember: false,
            expires_at: Utc::now() + Duration::hours(DEFAULT_TTL_HOURS),
        }
    }

    fn ttl(&self) -> Duration {
        if self.remember {
            Duration::days(REMEMBER_TTL_DAYS)
        } else {
            Duration::hours(DEFAULT_TTL_HOURS)
        }
    }
}

/// Narrow persistence seam for session data.
#[async_trait]
pub trait SessionBackend: Send + Sync {
    async fn load(&self, id: Uuid) -> Option<SessionData>;
    async fn save(&self, id: Uuid, data: SessionData);
    async fn remove(&self, id: Uuid);
}

/// Default backend: an in-process map. Expired entries are dropped on load.
pub struct MemoryBackend {
    entries: RwLock<HashMap<Uuid, SessionData>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        MemoryBackend {
            entries: RwLock::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl SessionBackend for MemoryBackend {
    async fn load(&self, id: Uuid) -> Option<SessionData> {
        let expired = {
            let entries = self.entries.read().await;
            match entries.get(&id) {
                Some(data) if data.expires_at > Utc::now() => return Some(data.clone()),
                Some(_) => true,
                None => false,
            }
        };
        if expired {
            self.entries.write().await.remove(&id);
        }
        None
    }

    async fn save(&self, id: Uuid, data: SessionData) {
        self.entries.write().await.insert(id, data);
    }

    async fn remove(&self, id: Uuid) {
        self.entries.write().await.remove(&id);
    }
}

/// Cheap-to-clone handle on the configured backend.
#[derive(Clone)]
pub struct SessionStore {
    backend: Arc<dyn SessionBackend>,
}

impl SessionStore {
    pub fn with_backend(backend: Arc<dyn SessionBackend>) -> Self {
        SessionStore { backend }
    }

    /// True when the id maps to a live (unexpired) session.
    pub async fn exists(&self, id: Uuid) -> bool {
        self.backend.load(id).await.is_some()
    }

    pub fn session(&self, id: Uuid) -> Session {
        Session {
            id,
            store: self.clone(),
        }
    }
}

/// The per-request session handle injected by the middleware.
///
/// All mutation funnels through [`Session::with`]: load (or start fresh),
/// apply, refresh expiry, save. A session is driven by one request at a
/// time, which keeps this read-modify-write safe without extra locking.
#[derive(Clone)]
pub struct Session {
    id: Uuid,
    store: SessionStore,
}

impl Session {
    pub async fn with<T>(&self, f: impl FnOnce(&mut SessionData) -> T) -> T {
        let mut data = self
            .store
            .backend
            .load(self.id)
            .await
            .unwrap_or_else(SessionData::new);
        let out = f(&mut data);
        data.expires_at = Utc::now() + data.ttl();
        self.store.backend.save(self.id, data).await;
        out
    }

    pub async fn flash(&self, level: FlashLevel, message: impl Into<String>) {
        let message = message.into();
        self.with(|d| d.flashes.push(Flash { level, message })).await;
    }

    /// Drains queued flashes; each notice is shown exactly once.
    pub async fn take_flashes(&self) -> Vec<Flash> {
        self.with(|d| std::mem::take(&mut d.flashes)).await
    }

    pub async fn user(&self) -> Option<String> {
        self.with(|d| d.user.clone()).await
    }

    /// Marks the session authenticated. `remember` extends the lifetime.
    pub async fn login(&self, username: &str, remember: bool) {
        self.with(|d| {
            d.user = Some(username.to_string());
            d.remember = remember;
        })
        .await;
    }

    /// Clears all session data in place, returning the prior user. The id
    /// survives so notices flashed afterwards still reach the client.
    pub async fn reset(&self) -> Option<String> {
        self.with(|d| {
            let user = d.user.take();
            *d = SessionData::new();
            user
        })
        .await
    }

    pub async fn bump_visits(&self) -> u64 {
        self.with(|d| {
            d.visits += 1;
            d.visits
        })
        .await
    }

    pub async fn visits(&self) -> u64 {
        self.with(|d| d.visits).await
    }

    pub async fn add_contact(&self, contact: ContactMessage) {
        self.with(|d| d.contacts.push(contact)).await;
    }

    pub async fn contacts(&self) -> Vec<ContactMessage> {
        self.with(|d| d.contacts.clone()).await
    }

    pub async fn add_upload(&self, record: UploadRecord) {
        self.with(|d| d.uploads.push(record)).await;
    }

    pub async fn uploads(&self) -> Vec<UploadRecord> {
        self.with(|d| d.uploads.clone()).await
    }

    pub async fn add_feedback(&self, entry: FeedbackEntry) {
        self.with(|d| d.feedbacks.push(entry)).await;
    }
}
