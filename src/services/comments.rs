use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::error::{AppError, Result};
use crate::models::{Comment, CommentView};
use crate::store::BlogStore;

pub struct CommentService {
    store: Arc<BlogStore>,
}

impl CommentService {
    pub fn new(store: Arc<BlogStore>) -> Self {
        Self { store }
    }

    /// Append a comment to an existing post.
    pub async fn add_comment(
        &self,
        post_id: Uuid,
        author_id: Uuid,
        text: &str,
    ) -> Result<CommentView> {
        if text.trim().is_empty() {
            return Err(AppError::Validation(
                "Comment text cannot be empty".to_string(),
            ));
        }

        let text = text.to_string();
        self.store
            .update(move |doc| {
                if doc.post(post_id).is_none() {
                    return Err(AppError::NotFound("Post not found".to_string()));
                }

                let comment = Comment {
                    id: Uuid::new_v4(),
                    post_id,
                    author_id,
                    text,
                    created_at: Utc::now(),
                };
                doc.comments.push(comment.clone());

                let author = doc.author_summary(author_id);
                Ok(CommentView { comment, author })
            })
            .await
    }

    /// Delete a comment; only its author may do so.
    pub async fn delete_comment(&self, comment_id: Uuid, caller: Uuid) -> Result<()> {
        self.store
            .update(move |doc| {
                let comment = doc
                    .comment(comment_id)
                    .ok_or_else(|| AppError::NotFound("Comment not found".to_string()))?;

                if comment.author_id != caller {
                    return Err(AppError::Forbidden(
                        "You can only delete your own comments".to_string(),
                    ));
                }

                doc.comments.retain(|c| c.id != comment_id);
                Ok(())
            })
            .await
    }
}
