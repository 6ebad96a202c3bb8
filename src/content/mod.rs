//! Content module - posts, glossary terms and their loading

mod frontmatter;
pub mod loader;
mod markdown;
mod post;

pub use frontmatter::FrontMatter;
pub use markdown::PlainText;
pub use post::{BlogPost, GlossaryTerm};

/// Everything loaded for one snapshot of the site
#[derive(Debug, Clone, Default)]
pub struct Content {
    /// Posts, newest first
    pub posts: Vec<BlogPost>,
    /// Glossary terms, alphabetical
    pub glossary: Vec<GlossaryTerm>,
}

impl Content {
    /// Find a post by slug
    pub fn post(&self, slug: &str) -> Option<&BlogPost> {
        self.posts.iter().find(|p| p.slug == slug)
    }
}
