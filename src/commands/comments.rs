//! Read and write comments through the external API

use anyhow::Result;

use crate::api::{Comment, CommentThread, CommentsApi};

/// Print the comment thread of a post
pub async fn show<A: CommentsApi + ?Sized>(api: &A, post_slug: &str) -> Result<()> {
    let thread = CommentThread::load(api, post_slug).await;
    print!("{}", render(&thread));
    Ok(())
}

/// Post a comment or reply
pub async fn submit<A: CommentsApi + ?Sized>(
    api: &A,
    post_slug: &str,
    content: &str,
    parent_id: Option<&str>,
) -> Result<()> {
    let comment = api.submit_comment(content, post_slug, parent_id).await?;
    println!("Posted comment {}", comment.id);
    Ok(())
}

/// Like (or unlike) a comment
pub async fn like<A: CommentsApi + ?Sized>(
    api: &A,
    post_slug: &str,
    comment_id: &str,
    is_reply: bool,
) -> Result<()> {
    let response = api.like_comment(comment_id, post_slug, is_reply).await?;
    match response.likes {
        Some(likes) => println!("Comment {} now has {} likes", comment_id, likes),
        None => println!("Like recorded for comment {}", comment_id),
    }
    Ok(())
}

pub fn render(thread: &CommentThread) -> String {
    if thread.is_empty() {
        return "No comments yet.\n".to_string();
    }

    let mut out = format!("Comments ({}):\n", thread.len());
    for comment in &thread.comments {
        render_comment(&mut out, comment, 1);
        for reply in &comment.replies {
            render_comment(&mut out, reply, 2);
        }
    }
    out
}

fn render_comment(out: &mut String, comment: &Comment, depth: usize) {
    let indent = "  ".repeat(depth);
    let author = comment.author_name.as_deref().unwrap_or("Anonymous");
    let date = comment
        .created_at
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default();
    out.push_str(&format!(
        "{}[{}] {} {} ({} likes)\n{}  {}\n",
        indent, comment.id, author, date, comment.likes, indent, comment.content
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_thread() {
        let mut parent = Comment::new("c1", "post", "Helpful");
        parent.author_name = Some("Rina".to_string());
        parent.likes = 2;
        parent.replies.push(Comment::new("r1", "post", "Thanks"));
        let thread = CommentThread {
            post_slug: "post".to_string(),
            comments: vec![parent],
        };

        let out = render(&thread);
        assert!(out.starts_with("Comments (2):"));
        assert!(out.contains("  [c1] Rina  (2 likes)\n    Helpful\n"));
        assert!(out.contains("    [r1] Anonymous  (0 likes)\n      Thanks\n"));
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render(&CommentThread::default()), "No comments yet.\n");
    }
}
