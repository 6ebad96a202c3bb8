//! Comment thread state with optimistic likes

use super::{ApiError, Comment, CommentsApi};

/// The comments of one post as currently displayed
#[derive(Debug, Clone, Default)]
pub struct CommentThread {
    pub post_slug: String,
    pub comments: Vec<Comment>,
}

impl CommentThread {
    /// Load the thread; a failed fetch shows an empty thread
    pub async fn load<A: CommentsApi + ?Sized>(api: &A, post_slug: &str) -> Self {
        let comments = match api.fetch_comments(post_slug).await {
            Ok(comments) => comments,
            Err(e) => {
                tracing::error!("Showing empty thread for '{}': {}", post_slug, e);
                Vec::new()
            }
        };
        Self {
            post_slug: post_slug.to_string(),
            comments,
        }
    }

    /// Number of comments including replies
    pub fn len(&self) -> usize {
        self.comments.iter().map(|c| 1 + c.replies.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.comments.is_empty()
    }

    /// Post a comment, or a reply to `parent_id`.
    ///
    /// The comment is added once the server returns it.
    pub async fn submit<A: CommentsApi + ?Sized>(
        &mut self,
        api: &A,
        content: &str,
        parent_id: Option<&str>,
    ) -> Result<(), ApiError> {
        let content = content.trim();
        if content.is_empty() {
            return Err(ApiError::EmptyComment);
        }
        if let Some(parent) = parent_id {
            if !self.comments.iter().any(|c| c.id == parent) {
                return Err(ApiError::UnknownComment(parent.to_string()));
            }
        }

        let created = api.submit_comment(content, &self.post_slug, parent_id).await?;
        match parent_id {
            Some(parent) => {
                if let Some(comment) = self.comments.iter_mut().find(|c| c.id == parent) {
                    comment.replies.push(created);
                }
            }
            None => self.comments.insert(0, created),
        }
        Ok(())
    }

    /// Toggle a like locally, then confirm with the server.
    ///
    /// The local change is rolled back if the request fails.
    pub async fn toggle_like<A: CommentsApi + ?Sized>(
        &mut self,
        api: &A,
        comment_id: &str,
    ) -> Result<(), ApiError> {
        let is_reply = {
            let (comment, is_reply) = self
                .find_mut(comment_id)
                .ok_or_else(|| ApiError::UnknownComment(comment_id.to_string()))?;
            apply_toggle(comment);
            is_reply
        };

        match api.like_comment(comment_id, &self.post_slug, is_reply).await {
            Ok(response) => {
                if let Some((comment, _)) = self.find_mut(comment_id) {
                    if let Some(likes) = response.likes {
                        comment.likes = likes;
                    }
                    if let Some(liked) = response.liked {
                        comment.liked = liked;
                    }
                }
                Ok(())
            }
            Err(e) => {
                if let Some((comment, _)) = self.find_mut(comment_id) {
                    apply_toggle(comment);
                }
                Err(e)
            }
        }
    }

    /// Find a comment or reply, reporting whether it is a reply
    fn find_mut(&mut self, comment_id: &str) -> Option<(&mut Comment, bool)> {
        for comment in self.comments.iter_mut() {
            if comment.id == comment_id {
                return Some((comment, false));
            }
            if let Some(reply) = comment.replies.iter_mut().find(|r| r.id == comment_id) {
                return Some((reply, true));
            }
        }
        None
    }
}

fn apply_toggle(comment: &mut Comment) {
    if comment.liked {
        comment.liked = false;
        comment.likes = comment.likes.saturating_sub(1);
    } else {
        comment.liked = true;
        comment.likes += 1;
    }
}
