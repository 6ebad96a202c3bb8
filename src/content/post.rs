//! Blog post and glossary term models

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

use crate::listing::ContentRecord;

/// A blog post loaded from a Markdown/MDX file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogPost {
    /// URL-friendly identifier, unique within the blog
    pub slug: String,

    pub title: String,

    /// Summary from front-matter
    pub description: String,

    /// Front-matter excerpt, or the opening paragraph of the body
    pub excerpt: String,

    /// Publication date
    pub date: NaiveDateTime,

    /// Last updated date
    pub updated: Option<NaiveDateTime>,

    pub tags: Vec<String>,

    pub author: Option<String>,

    /// Drafts are hidden unless `render_drafts` is set
    pub draft: bool,

    /// Estimated reading time in minutes
    pub reading_time: usize,

    /// Source file path (relative to the content directory)
    pub source: String,

    /// Full source file path
    #[serde(skip)]
    pub full_source: PathBuf,

    /// Raw body (front-matter stripped)
    #[serde(skip)]
    pub raw: String,

    /// Custom front-matter fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl BlogPost {
    /// Create a new post with minimal required fields
    pub fn new(title: &str, date: NaiveDateTime) -> Self {
        Self {
            slug: slug::slugify(title),
            title: title.to_string(),
            description: String::new(),
            excerpt: String::new(),
            date,
            updated: None,
            tags: Vec::new(),
            author: None,
            draft: false,
            reading_time: 1,
            source: String::new(),
            full_source: PathBuf::new(),
            raw: String::new(),
            extra: HashMap::new(),
        }
    }

    /// The next older post in a date-sorted list
    pub fn older<'a>(&self, posts: &'a [BlogPost]) -> Option<&'a BlogPost> {
        let pos = posts.iter().position(|p| p.slug == self.slug)?;
        posts.get(pos + 1)
    }

    /// The next newer post in a date-sorted list
    pub fn newer<'a>(&self, posts: &'a [BlogPost]) -> Option<&'a BlogPost> {
        let pos = posts.iter().position(|p| p.slug == self.slug)?;
        pos.checked_sub(1).and_then(|i| posts.get(i))
    }
}

impl ContentRecord for BlogPost {
    fn identifier(&self) -> &str {
        &self.slug
    }

    fn display_text(&self) -> &str {
        &self.title
    }

    fn searchable_fields(&self) -> Vec<&str> {
        let mut fields = vec![
            self.title.as_str(),
            self.description.as_str(),
            self.excerpt.as_str(),
        ];
        fields.extend(self.tags.iter().map(String::as_str));
        fields
    }

    fn category_tags(&self) -> &[String] {
        &self.tags
    }
}

/// A legal term from the glossary file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlossaryTerm {
    pub term: String,
    pub definition: String,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Other glossary terms worth reading alongside this one
    #[serde(default)]
    pub related: Vec<String>,
    /// Statute or reference the definition is drawn from
    #[serde(default)]
    pub source: Option<String>,
}

impl GlossaryTerm {
    pub fn new(term: &str, definition: &str) -> Self {
        Self {
            term: term.to_string(),
            definition: definition.to_string(),
            tags: Vec::new(),
            related: Vec::new(),
            source: None,
        }
    }

    /// Uppercase first character, used for alphabetic grouping
    pub fn group_key(&self) -> char {
        self.term
            .trim_start()
            .chars()
            .next()
            .and_then(|c| c.to_uppercase().next())
            .unwrap_or('#')
    }

    /// URL hash fragment (without `#`) for this term
    pub fn anchor(&self) -> String {
        slug::slugify(&self.term)
    }
}

impl ContentRecord for GlossaryTerm {
    fn identifier(&self) -> &str {
        &self.term
    }

    fn display_text(&self) -> &str {
        &self.term
    }

    fn searchable_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.term.as_str(), self.definition.as_str()];
        fields.extend(self.tags.iter().map(String::as_str));
        fields
    }

    fn category_tags(&self) -> &[String] {
        &self.tags
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(day: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, day)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_new_post_slug() {
        let post = BlogPost::new("Cryptocurrency Law in Indonesia", date(1));
        assert_eq!(post.slug, "cryptocurrency-law-in-indonesia");
    }

    #[test]
    fn test_older_newer() {
        let posts = vec![
            BlogPost::new("Third", date(3)),
            BlogPost::new("Second", date(2)),
            BlogPost::new("First", date(1)),
        ];
        assert_eq!(posts[1].older(&posts).unwrap().title, "First");
        assert_eq!(posts[1].newer(&posts).unwrap().title, "Third");
        assert!(posts[0].newer(&posts).is_none());
        assert!(posts[2].older(&posts).is_none());
    }

    #[test]
    fn test_post_searchable_fields() {
        let mut post = BlogPost::new("Title", date(1));
        post.description = "Desc".to_string();
        post.excerpt = "Excerpt".to_string();
        post.tags = vec!["law".to_string()];
        assert_eq!(post.searchable_fields(), vec!["Title", "Desc", "Excerpt", "law"]);
    }

    #[test]
    fn test_group_key_and_anchor() {
        let term = GlossaryTerm::new("actio pauliana", "An action to annul fraudulent acts.");
        assert_eq!(term.group_key(), 'A');
        assert_eq!(term.anchor(), "actio-pauliana");
        assert_eq!(GlossaryTerm::new("", "").group_key(), '#');
    }
}
