//! Wire types for the comments and page-view APIs (camelCase JSON)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A comment or reply as returned by `GET /api/comments`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    pub post_slug: String,
    pub content: String,
    #[serde(default)]
    pub author_name: Option<String>,
    #[serde(default)]
    pub author_image: Option<String>,
    #[serde(default)]
    pub parent_id: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub likes: u64,
    /// Whether the signed-in user liked this comment
    #[serde(default)]
    pub liked: bool,
    #[serde(default)]
    pub replies: Vec<Comment>,
}

impl Comment {
    pub fn new(id: &str, post_slug: &str, content: &str) -> Self {
        Self {
            id: id.to_string(),
            post_slug: post_slug.to_string(),
            content: content.to_string(),
            author_name: None,
            author_image: None,
            parent_id: None,
            created_at: None,
            likes: 0,
            liked: false,
            replies: Vec::new(),
        }
    }
}

/// Body of `POST /api/comments`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewComment<'a> {
    pub content: &'a str,
    pub post_slug: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<&'a str>,
}

/// Body of `POST /api/comments/like`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LikeRequest<'a> {
    pub comment_id: &'a str,
    pub post_slug: &'a str,
    pub is_reply: bool,
}

/// Like state reported back by the server; fields it omits keep the
/// optimistic value
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct LikeResponse {
    #[serde(default)]
    pub likes: Option<u64>,
    #[serde(default)]
    pub liked: Option<bool>,
}

/// Response of `GET /api/page-views/?slug=`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageViews {
    pub views: u64,
}
