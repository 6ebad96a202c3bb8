//! List posts and tags

use anyhow::Result;

use crate::content::Content;
use crate::listing::{tag_index, BlogListing, ListingQuery};
use crate::Site;

/// Print one page of the blog listing for `query`
pub fn run(site: &Site, query: &ListingQuery) -> Result<()> {
    let content = site.load_content()?;
    print!("{}", render(site, &content, query)?);
    Ok(())
}

/// Render a listing page as plain text
pub fn render(site: &Site, content: &Content, query: &ListingQuery) -> Result<String> {
    let listing = BlogListing::resolve(&content.posts, query, site.paginator()?);
    let mut out = String::new();

    if listing.is_empty() {
        out.push_str("No posts found.\n");
        if listing.query.is_filtered() {
            out.push_str("Clear the search or tag to see all posts.\n");
        }
        return Ok(out);
    }

    out.push_str(&format!(
        "Posts ({}), page {} of {}:\n",
        listing.total_items, listing.query.page, listing.total_pages
    ));
    for post in &listing.posts {
        out.push_str(&format!(
            "  {} - {} [{}] ({} min)\n",
            post.date.format("%Y-%m-%d"),
            post.title,
            post.slug,
            post.reading_time
        ));
        if !post.tags.is_empty() {
            out.push_str(&format!("      tags: {}\n", post.tags.join(", ")));
        }
    }

    let mut nav = Vec::new();
    if let Some(prev) = listing.prev {
        nav.push(format!("prev: {}", listing.query.with_page(prev).href("/blog")));
    }
    if let Some(next) = listing.next {
        nav.push(format!("next: {}", listing.query.with_page(next).href("/blog")));
    }
    if !nav.is_empty() {
        out.push_str(&format!("  {}\n", nav.join("  ")));
    }

    Ok(out)
}

/// Print tags with their post counts
pub fn run_tags(site: &Site) -> Result<()> {
    let content = site.load_content()?;
    let tags = tag_index(&content.posts);
    println!("Tags ({}):", tags.len());
    for tag in tags {
        println!("  {} ({})", tag.name, tag.count);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::BlogPost;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn content(count: usize) -> Content {
        let date = NaiveDate::from_ymd_opt(2024, 2, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let posts = (0..count)
            .map(|i| BlogPost::new(&format!("Post {}", i), date))
            .collect();
        Content {
            posts,
            glossary: Vec::new(),
        }
    }

    #[test]
    fn test_render_first_page() {
        let dir = TempDir::new().unwrap();
        let site = Site::new(dir.path()).unwrap();
        let out = render(&site, &content(20), &ListingQuery::default()).unwrap();
        assert!(out.starts_with("Posts (20), page 1 of 3:"));
        assert!(out.contains("next: /blog?page=2"));
        assert!(!out.contains("prev:"));
    }

    #[test]
    fn test_render_no_results() {
        let dir = TempDir::new().unwrap();
        let site = Site::new(dir.path()).unwrap();
        let query = ListingQuery::parse("search=nothing");
        let out = render(&site, &content(3), &query).unwrap();
        assert!(out.contains("No posts found."));
        assert!(out.contains("Clear the search"));
    }

    #[test]
    fn test_zero_per_page_is_error() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("_config.yml"), "per_page: 0\n").unwrap();
        let site = Site::new(dir.path()).unwrap();
        assert!(render(&site, &content(3), &ListingQuery::default()).is_err());
    }
}
