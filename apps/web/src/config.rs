use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable has a default so the site boots with zero configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub upload_dir: PathBuf,
    pub max_content_length: usize,
    pub resume_data_path: PathBuf,
    pub admin_password: String,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            upload_dir: std::env::var("UPLOAD_FOLDER")
                .unwrap_or_else(|_| "uploads".to_string())
                .into(),
            max_content_length: std::env::var("MAX_CONTENT_LENGTH")
                .unwrap_or_else(|_| (16 * 1024 * 1024).to_string())
                .parse::<usize>()
                .context("MAX_CONTENT_LENGTH must be a byte count")?,
            resume_data_path: std::env::var("RESUME_DATA")
                .unwrap_or_else(|_| "data/resume.json".to_string())
                .into(),
            admin_password: std::env::var("ADMIN_PASSWORD")
                .unwrap_or_else(|_| "password123".to_string()),
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}
