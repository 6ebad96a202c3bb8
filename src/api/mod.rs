//! Client side of the external comments and page-view APIs
//!
//! The backend is not part of this crate. Calls go through the
//! [`CommentsApi`] and [`ViewsApi`] traits so listings and comment threads
//! can be exercised without a network. Every call is a single attempt:
//! failures are logged and returned, never retried.

mod client;
mod models;
mod thread;
mod views;

pub use client::HttpApiClient;
pub use models::{Comment, LikeRequest, LikeResponse, NewComment, PageViews};
pub use thread::CommentThread;
pub use views::ViewCount;

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("sign in required")]
    Unauthenticated,

    #[error("comment content is empty")]
    EmptyComment,

    #[error("comment {0} not found")]
    UnknownComment(String),

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("server responded with {status}: {message}")]
    Status { status: u16, message: String },

    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Comment persistence and likes
#[async_trait]
pub trait CommentsApi: Send + Sync {
    /// All comments for a post, with replies nested
    async fn fetch_comments(&self, post_slug: &str) -> Result<Vec<Comment>, ApiError>;

    /// Create a comment, or a reply when `parent_id` is set
    async fn submit_comment(
        &self,
        content: &str,
        post_slug: &str,
        parent_id: Option<&str>,
    ) -> Result<Comment, ApiError>;

    /// Toggle the current user's like on a comment or reply
    async fn like_comment(
        &self,
        comment_id: &str,
        post_slug: &str,
        is_reply: bool,
    ) -> Result<LikeResponse, ApiError>;
}

/// Page-view counters
#[async_trait]
pub trait ViewsApi: Send + Sync {
    async fn fetch_views(&self, slug: &str) -> Result<PageViews, ApiError>;
}

/// Fetch a view count, degrading to the placeholder on failure
pub async fn view_count<V: ViewsApi + ?Sized>(api: &V, slug: &str) -> ViewCount {
    match api.fetch_views(slug).await {
        Ok(views) => ViewCount::Known(views.views),
        Err(e) => {
            tracing::error!("Failed to fetch views for '{}': {}", slug, e);
            ViewCount::Unavailable
        }
    }
}


#[cfg(test)]
mod tests {
    use super::fake::FakeApi;
    use super::*;

    #[tokio::test]
    async fn test_view_count_known() {
        let api = FakeApi {
            views: Some(1234),
            ..Default::default()
        };
        assert_eq!(view_count(&api, "post").await, ViewCount::Known(1234));
    }

    #[tokio::test]
    async fn test_view_count_failure_is_placeholder() {
        let api = FakeApi::failing();
        let count = view_count(&api, "post").await;
        assert_eq!(count, ViewCount::Unavailable);
        assert_eq!(count.to_string(), "–");
        assert_eq!(api.calls(), 1);
    }
}
