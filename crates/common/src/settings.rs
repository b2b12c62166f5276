//! Deployment settings loaded from environment variables.
//!
//! Settings are built once at process start with [`Settings::from_env`] and
//! passed by reference to whatever constructs agents. There is no cached
//! global; callers own the instance.

use std::path::PathBuf;

use crate::error::{HireflowError, Result};
use tracing::warn;

const DEFAULT_APP_NAME: &str = "AI Hiring Assistant";
const DEFAULT_UPLOAD_DIR: &str = "uploads";
const DEFAULT_MAX_UPLOAD_SIZE: u64 = 10 * 1024 * 1024; // 10MB
const DEFAULT_TOKEN_EXPIRE_MINUTES: u64 = 60 * 24 * 8; // 8 days

/// Object-storage credentials. All fields optional; storage is disabled
/// when the bucket is unset.
#[derive(Debug, Clone, Default)]
pub struct StorageSettings {
    pub bucket: Option<String>,
    pub region: Option<String>,
    pub access_key: Option<String>,
    pub secret_key: Option<String>,
}

/// SMTP delivery settings. Optional; email is disabled when the host is
/// unset.
#[derive(Debug, Clone, Default)]
pub struct SmtpSettings {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub user: Option<String>,
    pub password: Option<String>,
    pub from_email: Option<String>,
    pub from_name: Option<String>,
    pub tls: bool,
}

/// Vector-index (Pinecone) connection parameters.
#[derive(Debug, Clone)]
pub struct VectorIndexSettings {
    pub api_key: String,
    pub environment: String,
    pub index_name: String,
}

/// Deployment configuration for the hiring assistant.
#[derive(Debug, Clone)]
pub struct Settings {
    pub app_name: String,
    pub debug: bool,

    pub secret_key: String,
    pub access_token_expire_minutes: u64,

    pub database_url: String,
    pub openai_api_key: String,

    /// Allowed CORS origins for whatever transport exposes the agents.
    pub cors_origins: Vec<String>,

    pub vector_index: VectorIndexSettings,
    pub storage: StorageSettings,
    pub smtp: SmtpSettings,

    pub upload_dir: PathBuf,
    pub max_upload_size: u64,
}

impl Settings {
    /// Load settings from process environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load settings through an arbitrary variable lookup.
    ///
    /// `from_env` delegates here; tests supply a map instead of mutating
    /// the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| -> Result<String> {
            lookup(key)
                .filter(|v| !v.is_empty())
                .ok_or_else(|| {
                    HireflowError::Config(format!("Missing required environment variable {key}"))
                })
        };

        let debug = matches!(
            lookup("DEBUG").as_deref(),
            Some("1") | Some("true") | Some("True")
        );
        if debug {
            warn!("DEBUG mode enabled; do not use in production");
        }

        let cors_origins = lookup("BACKEND_CORS_ORIGINS")
            .map(|raw| parse_cors_origins(&raw))
            .unwrap_or_default();

        let smtp_port = match lookup("SMTP_PORT") {
            Some(raw) => Some(raw.parse::<u16>().map_err(|_| {
                HireflowError::Config(format!("SMTP_PORT is not a valid port: {raw}"))
            })?),
            None => None,
        };

        let max_upload_size = match lookup("MAX_UPLOAD_SIZE") {
            Some(raw) => raw.parse::<u64>().map_err(|_| {
                HireflowError::Config(format!("MAX_UPLOAD_SIZE is not a valid size: {raw}"))
            })?,
            None => DEFAULT_MAX_UPLOAD_SIZE,
        };

        Ok(Self {
            app_name: lookup("APP_NAME").unwrap_or_else(|| DEFAULT_APP_NAME.into()),
            debug,
            secret_key: required("SECRET_KEY")?,
            access_token_expire_minutes: DEFAULT_TOKEN_EXPIRE_MINUTES,
            database_url: required("DATABASE_URL")?,
            openai_api_key: required("OPENAI_API_KEY")?,
            cors_origins,
            vector_index: VectorIndexSettings {
                api_key: required("PINECONE_API_KEY")?,
                environment: required("PINECONE_ENVIRONMENT")?,
                index_name: required("PINECONE_INDEX_NAME")?,
            },
            storage: StorageSettings {
                bucket: lookup("STORAGE_BUCKET"),
                region: lookup("STORAGE_REGION"),
                access_key: lookup("STORAGE_ACCESS_KEY"),
                secret_key: lookup("STORAGE_SECRET_KEY"),
            },
            smtp: SmtpSettings {
                host: lookup("SMTP_HOST"),
                port: smtp_port,
                user: lookup("SMTP_USER"),
                password: lookup("SMTP_PASSWORD"),
                from_email: lookup("EMAILS_FROM_EMAIL"),
                from_name: lookup("EMAILS_FROM_NAME"),
                tls: !matches!(lookup("SMTP_TLS").as_deref(), Some("0") | Some("false")),
            },
            upload_dir: lookup("UPLOAD_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_UPLOAD_DIR)),
            max_upload_size,
        })
    }
}

/// Parse a comma-separated origin list, e.g.
/// `http://localhost:3000, https://app.example.com`.
pub fn parse_cors_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(|s| s.trim_end_matches('/').to_string())
        .collect()
}
