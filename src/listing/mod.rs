//! Listing core: filtering, sorting, grouping and pagination
//!
//! Everything here is synchronous and pure. Operations borrow the loaded
//! collection and return derived views (`Vec<&T>`), never mutating it.

mod blog;
mod filter;
mod glossary;
mod paginate;
mod query;
mod record;
mod sort;
mod tags;

pub use blog::BlogListing;
pub use filter::{filter, Filter};
pub use glossary::{find_by_anchor, GlossaryView};
pub use paginate::{Page, PaginationError, Paginator, BLOG_PAGE_SIZE};
pub use query::ListingQuery;
pub use record::ContentRecord;
pub use sort::{group_alphabetically, sort_by_date_desc};
pub use tags::{tag_index, TagCount};
