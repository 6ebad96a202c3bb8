//! The record abstraction shared by posts and glossary terms

/// One filterable item: a blog post or a glossary term
pub trait ContentRecord {
    /// Unique within a loaded collection (slug or term text)
    fn identifier(&self) -> &str;

    /// Primary label (title or term)
    fn display_text(&self) -> &str;

    /// Fields matched by free-text search, in order
    fn searchable_fields(&self) -> Vec<&str>;

    fn category_tags(&self) -> &[String];

    /// Lowercased searchable fields joined by spaces
    fn search_text(&self) -> String {
        self.searchable_fields().join(" ").to_lowercase()
    }

    /// Whether any category tag equals `tag`, ignoring case
    fn has_tag(&self, tag: &str) -> bool {
        let tag = tag.to_lowercase();
        self.category_tags()
            .iter()
            .any(|t| t.to_lowercase() == tag)
    }
}
