//! Askama template structs, one per page.
//!
//! Every page carries a [`PageContext`] (drained flashes + login state)
//! consumed by the shared shell in `base.html`. Handlers build the data;
//! templates only display it.

use std::sync::Arc;

use askama::Template;

use crate::content::{PortfolioItem, Service};
use crate::resume::record::ResumeRecord;
use crate::session::flash::Flash;
use crate::session::store::{ContactMessage, Session};
use crate::uploads::UploadRecord;

/// Shared shell state: notices to show once, and whether the nav shows the
/// login or logout link.
pub struct PageContext {
    pub flashes: Vec<Flash>,
    pub is_logged_in: bool,
    pub nav_user: String,
}

impl PageContext {
    /// Drains the session's flash queue and resolves the nav state.
    pub async fn gather(session: &Session) -> Self {
        let user = session.user().await;
        PageContext {
            flashes: session.take_flashes().await,
            is_logged_in: user.is_some(),
            nav_user: user.unwrap_or_default(),
        }
    }
}

/// One row on a skills listing: category plus comma-joined items.
pub struct SkillRow {
    pub category: String,
    pub items: String,
}

/// Flattens the skills mapping into display rows, preserving order.
pub fn skill_rows(record: &ResumeRecord) -> Vec<SkillRow> {
    record
        .skills
        .iter()
        .map(|(category, items)| SkillRow {
            category: category.clone(),
            items: items.join(", "),
        })
        .collect()
}

#[derive(Template)]
#[template(path = "index.html")]
pub struct HomePage {
    pub ctx: PageContext,
    pub projects: &'static [PortfolioItem],
    pub skills: Vec<SkillRow>,
}

#[derive(Template)]
#[template(path = "about.html")]
pub struct AboutPage {
    pub ctx: PageContext,
    pub user_name: String,
}

#[derive(Template)]
#[template(path = "portfolio.html")]
pub struct PortfolioPage {
    pub ctx: PageContext,
    pub projects: &'static [PortfolioItem],
    pub skills: Vec<SkillRow>,
}

#[derive(Template)]
#[template(path = "project_detail.html")]
pub struct ProjectDetailPage {
    pub ctx: PageContext,
    pub project: &'static PortfolioItem,
}

#[derive(Template)]
#[template(path = "contact.html")]
pub struct ContactPage {
    pub ctx: PageContext,
}

#[derive(Template)]
#[template(path = "skills.html")]
pub struct SkillsPage {
    pub ctx: PageContext,
    pub skills: Vec<SkillRow>,
}

#[derive(Template)]
#[template(path = "services.html")]
pub struct ServicesPage {
    pub ctx: PageContext,
    pub services: &'static [Service],
}

#[derive(Template)]
#[template(path = "login.html")]
pub struct LoginPage {
    pub ctx: PageContext,
}

#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardPage {
    pub ctx: PageContext,
    pub user: String,
    pub contacts: Vec<ContactMessage>,
    pub visits: u64,
}

#[derive(Template)]
#[template(path = "resume.html")]
pub struct ResumePage {
    pub ctx: PageContext,
    pub uploads: Vec<UploadRecord>,
    pub resume: Arc<ResumeRecord>,
}

#[derive(Template)]
#[template(path = "feedback.html")]
pub struct FeedbackPage {
    pub ctx: PageContext,
}

#[derive(Template)]
#[template(path = "errors/404.html")]
pub struct NotFoundPage {
    pub ctx: PageContext,
}
