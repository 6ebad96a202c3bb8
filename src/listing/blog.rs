//! A resolved blog listing: filter, sort and paginate in one pass

use serde::Serialize;

use super::{sort_by_date_desc, Filter, ListingQuery, Paginator};
use crate::content::BlogPost;

/// The posts shown for one `ListingQuery`
#[derive(Debug, Clone, Serialize)]
pub struct BlogListing<'a> {
    /// The query actually shown, with the page clamped into range
    pub query: ListingQuery,
    pub posts: Vec<&'a BlogPost>,
    pub total_items: usize,
    pub total_pages: usize,
    pub prev: Option<usize>,
    pub next: Option<usize>,
}

impl<'a> BlogListing<'a> {
    /// Resolve `query` against `posts`.
    ///
    /// Pages requested outside the available range are clamped, so a stale
    /// bookmark shows the nearest page instead of failing.
    pub fn resolve(posts: &'a [BlogPost], query: &ListingQuery, paginator: Paginator) -> Self {
        let mut matches = Filter::new(&query.search, query.tag.as_deref()).apply(posts);
        sort_by_date_desc(&mut matches);

        let number = paginator.clamp(query.page, matches.len());
        if number != query.page {
            tracing::debug!("Clamped page {} to {}", query.page, number);
        }

        let (page_posts, total_pages, prev, next) = match paginator.page(&matches, number) {
            Ok(page) => (page.items.to_vec(), page.total_pages, page.prev(), page.next()),
            Err(e) => {
                tracing::warn!("Pagination failed after clamping: {}", e);
                (Vec::new(), 0, None, None)
            }
        };

        Self {
            query: query.with_page(number),
            posts: page_posts,
            total_items: matches.len(),
            total_pages,
            prev,
            next,
        }
    }

    /// No post matched the query
    pub fn is_empty(&self) -> bool {
        self.total_items == 0
    }
}
