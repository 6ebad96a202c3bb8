//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Environment variable that overrides `api.session_token`
pub const SESSION_TOKEN_ENV: &str = "LEXBLOG_SESSION_TOKEN";

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub description: String,
    pub author: String,
    pub url: String,

    // Directory
    pub content_dir: String,
    pub posts_dir: String,
    pub glossary_file: String,

    // Writing
    pub render_drafts: bool,
    pub excerpt_length: usize,

    // Pagination
    pub per_page: usize,

    // Comments and page views
    #[serde(default)]
    pub api: ApiConfig,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Lexblog".to_string(),
            description: String::new(),
            author: String::new(),
            url: "http://localhost:4000".to_string(),

            content_dir: "content".to_string(),
            posts_dir: "blog".to_string(),
            glossary_file: "glossary.yml".to_string(),

            render_drafts: false,
            excerpt_length: 160,

            per_page: 9,

            api: ApiConfig::default(),
            extra: HashMap::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Apply overrides from the process environment
    pub fn apply_env(&mut self) {
        if let Ok(token) = std::env::var(SESSION_TOKEN_ENV) {
            if !token.trim().is_empty() {
                tracing::debug!("Using session token from {}", SESSION_TOKEN_ENV);
                self.api.session_token = Some(token);
            }
        }
    }
}

/// External comments / page-view API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL the `/api/...` paths are resolved against
    pub base_url: String,
    /// Session token forwarded as a bearer token on authenticated calls
    pub session_token: Option<String>,
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000".to_string(),
            session_token: None,
            timeout_secs: 10,
        }
    }
}
