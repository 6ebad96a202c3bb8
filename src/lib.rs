//! lexblog: content engine for a legal and technology blog
//!
//! Loads Markdown/MDX posts and a glossary of legal terms, and provides
//! the listing core used by the blog and glossary pages: search-and-tag
//! filtering, date ordering, alphabetic grouping and pagination. Comments
//! and page views live in an external service reached through [`api`].

pub mod api;
pub mod commands;
pub mod config;
pub mod content;
pub mod listing;
pub mod server;

use anyhow::Result;
use std::path::{Path, PathBuf};

/// A blog site rooted at a directory
#[derive(Debug, Clone)]
pub struct Site {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Content directory (posts and glossary)
    pub content_dir: PathBuf,
}

impl Site {
    /// Open a site directory, reading `_config.yml` when present
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let mut config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            tracing::debug!("No _config.yml in {:?}, using defaults", base_dir);
            config::SiteConfig::default()
        };
        config.apply_env();

        let content_dir = base_dir.join(&config.content_dir);

        Ok(Self {
            config,
            base_dir,
            content_dir,
        })
    }

    pub fn config_path(&self) -> PathBuf {
        self.base_dir.join("_config.yml")
    }

    pub fn posts_dir(&self) -> PathBuf {
        self.content_dir.join(&self.config.posts_dir)
    }

    pub fn glossary_path(&self) -> PathBuf {
        self.content_dir.join(&self.config.glossary_file)
    }

    /// Load posts and glossary
    pub fn load_content(&self) -> Result<content::Content> {
        let loader = content::loader::ContentLoader::new(self);
        let posts = loader.load_posts()?;
        let glossary = loader.load_glossary()?;
        tracing::info!(
            "Loaded {} posts and {} glossary terms",
            posts.len(),
            glossary.len()
        );
        Ok(content::Content { posts, glossary })
    }

    /// Paginator for blog listings
    pub fn paginator(&self) -> Result<listing::Paginator> {
        Ok(listing::Paginator::new(self.config.per_page)?)
    }
}
