//! Show page-view counters

use anyhow::Result;

use crate::api::{view_count, ViewsApi};

/// Print the view count for each slug; unavailable counts show `–`
pub async fn run<V: ViewsApi + ?Sized>(api: &V, slugs: &[String]) -> Result<()> {
    for slug in slugs {
        let count = view_count(api, slug).await;
        println!("{}: {} views", slug, count);
    }
    Ok(())
}
