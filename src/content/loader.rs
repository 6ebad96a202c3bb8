//! Content loader - loads posts and the glossary from the content directory

use anyhow::{Context, Result};
use chrono::{Local, NaiveDateTime};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

use super::markdown::{truncate_chars, PlainText};
use super::{BlogPost, FrontMatter, GlossaryTerm};
use crate::Site;

/// Loads posts and glossary terms for a site
pub struct ContentLoader<'a> {
    site: &'a Site,
}

impl<'a> ContentLoader<'a> {
    pub fn new(site: &'a Site) -> Self {
        Self { site }
    }

    /// Load all posts, newest first
    pub fn load_posts(&self) -> Result<Vec<BlogPost>> {
        let posts_dir = self.site.posts_dir();
        if !posts_dir.exists() {
            tracing::debug!("No posts directory at {:?}", posts_dir);
            return Ok(Vec::new());
        }

        let mut posts = Vec::new();
        let mut seen = HashSet::new();

        let entries = WalkDir::new(&posts_dir)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok());

        for entry in entries {
            let path = entry.path();
            if !path.is_file() || !is_post_file(path) {
                continue;
            }

            match self.load_post(path) {
                Ok(post) => {
                    if post.draft && !self.site.config.render_drafts {
                        tracing::debug!("Skipping draft {:?}", path);
                        continue;
                    }
                    if !seen.insert(post.slug.clone()) {
                        tracing::warn!("Duplicate slug '{}' in {:?}, skipping", post.slug, path);
                        continue;
                    }
                    posts.push(post);
                }
                Err(e) => {
                    tracing::warn!("Failed to load post {:?}: {}", path, e);
                }
            }
        }

        crate::listing::sort_by_date_desc(&mut posts);

        Ok(posts)
    }

    /// Load a single post from a file
    fn load_post(&self, path: &Path) -> Result<BlogPost> {
        let content = fs::read_to_string(path)?;
        let (fm, body) = FrontMatter::parse(&content)?;

        let file_modified = fs::metadata(path)
            .ok()
            .and_then(|m| m.modified().ok())
            .map(|t| chrono::DateTime::<Local>::from(t).naive_local());

        let date = fm
            .parse_date()
            .or(file_modified)
            .unwrap_or_else(|| Local::now().naive_local());
        let updated = fm.parse_updated();

        let file_stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("untitled")
            .to_string();

        // index.mdx inside a folder takes the folder name
        let stem = if file_stem == "index" {
            path.parent()
                .and_then(|p| p.file_name())
                .and_then(|s| s.to_str())
                .map(str::to_string)
                .unwrap_or(file_stem)
        } else {
            file_stem
        };

        let title = fm.title.clone().unwrap_or_else(|| stem.clone());
        let slug = fm
            .slug
            .as_deref()
            .map(slug::slugify)
            .unwrap_or_else(|| slug::slugify(&stem));

        let source = path
            .strip_prefix(&self.site.content_dir)
            .unwrap_or(path)
            .to_string_lossy()
            .to_string();

        let plain = PlainText::extract(body);
        let max_excerpt = self.site.config.excerpt_length;
        let excerpt = match fm.excerpt.as_deref() {
            Some(e) if !e.trim().is_empty() => e.trim().to_string(),
            _ => plain.excerpt(max_excerpt).unwrap_or_default(),
        };

        let mut post = BlogPost::new(&title, date);
        post.slug = slug;
        post.description = fm.description.unwrap_or_default();
        post.excerpt = truncate_chars(&excerpt, max_excerpt);
        post.updated = updated;
        post.tags = fm.tags;
        post.author = fm.author;
        post.draft = fm.draft;
        post.reading_time = plain.reading_time();
        post.source = source;
        post.full_source = path.to_path_buf();
        post.raw = body.to_string();
        post.extra = fm.extra;

        Ok(post)
    }

    /// Load the glossary, sorted alphabetically by term
    pub fn load_glossary(&self) -> Result<Vec<GlossaryTerm>> {
        let path = self.site.glossary_path();
        if !path.exists() {
            tracing::debug!("No glossary file at {:?}", path);
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&path)?;
        let terms: Vec<GlossaryTerm> = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse glossary {:?}", path))?;

        Ok(normalize_glossary(terms))
    }
}

/// Drop blank and duplicate terms, then sort case-insensitively
fn normalize_glossary(terms: Vec<GlossaryTerm>) -> Vec<GlossaryTerm> {
    let mut seen = HashSet::new();
    let mut terms: Vec<GlossaryTerm> = terms
        .into_iter()
        .filter(|t| {
            let key = t.term.trim().to_lowercase();
            if key.is_empty() {
                tracing::warn!("Skipping glossary entry without a term");
                return false;
            }
            if !seen.insert(key) {
                tracing::warn!("Duplicate glossary term '{}', skipping", t.term);
                return false;
            }
            true
        })
        .collect();

    terms.sort_by_key(|t| t.term.to_lowercase());
    terms
}

/// Markdown or MDX source file
fn is_post_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| matches!(e, "md" | "mdx" | "markdown"))
        .unwrap_or(false)
}

/// Publish date for a post created now
pub fn now() -> NaiveDateTime {
    Local::now().naive_local()
}
