use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::error::{AppError, Result};
use crate::models::{CommentView, LikeStatus, Post, PostDetail, PostView};
use crate::store::BlogStore;

pub struct PostService {
    store: Arc<BlogStore>,
}

impl PostService {
    pub fn new(store: Arc<BlogStore>) -> Self {
        Self { store }
    }

    /// Create a post. Title and content must be non-empty.
    pub async fn create_post(&self, author_id: Uuid, title: &str, content: &str) -> Result<Post> {
        if title.trim().is_empty() || content.trim().is_empty() {
            return Err(AppError::Validation(
                "Title and content are required".to_string(),
            ));
        }

        let title = title.to_string();
        let content = content.to_string();

        self.store
            .update(move |doc| {
                let now = Utc::now();
                let post = Post {
                    id: Uuid::new_v4(),
                    author_id,
                    title,
                    content,
                    likes: Vec::new(),
                    created_at: now,
                    updated_at: now,
                };
                // newest first
                doc.posts.insert(0, post.clone());
                Ok(post)
            })
            .await
    }

    /// All posts newest-first, each with its denormalized author.
    pub async fn list_posts(&self) -> Result<Vec<PostView>> {
        self.store
            .read(|doc| {
                Ok(doc
                    .posts
                    .iter()
                    .map(|post| PostView {
                        post: post.clone(),
                        author: doc.author_summary(post.author_id),
                    })
                    .collect())
            })
            .await
    }

    /// One post with author and all of its comments in insertion order.
    pub async fn get_post(&self, post_id: Uuid) -> Result<PostDetail> {
        self.store
            .read(move |doc| {
                let post = doc
                    .post(post_id)
                    .cloned()
                    .ok_or_else(post_not_found)?;

                let comments = doc
                    .comments
                    .iter()
                    .filter(|c| c.post_id == post_id)
                    .map(|c| CommentView {
                        comment: c.clone(),
                        author: doc.author_summary(c.author_id),
                    })
                    .collect();

                let author = doc.author_summary(post.author_id);
                Ok(PostDetail {
                    post,
                    author,
                    comments,
                })
            })
            .await
    }

    /// Partial update by the post's author; refreshes `updated_at`.
    pub async fn update_post(
        &self,
        post_id: Uuid,
        caller: Uuid,
        title: Option<&str>,
        content: Option<&str>,
    ) -> Result<Post> {
        let title = title.map(str::to_string);
        let content = content.map(str::to_string);

        self.store
            .update(move |doc| {
                let post = doc.post_mut(post_id).ok_or_else(post_not_found)?;
                if post.author_id != caller {
                    return Err(AppError::Forbidden(
                        "You can only edit your own posts".to_string(),
                    ));
                }

                if let Some(title) = title.filter(|t| !t.trim().is_empty()) {
                    post.title = title;
                }
                if let Some(content) = content.filter(|c| !c.trim().is_empty()) {
                    post.content = content;
                }
                post.updated_at = Utc::now();

                Ok(post.clone())
            })
            .await
    }

    /// Delete a post and cascade-delete its comments.
    pub async fn delete_post(&self, post_id: Uuid, caller: Uuid) -> Result<()> {
        self.store
            .update(move |doc| {
                let author_id = doc.post(post_id).ok_or_else(post_not_found)?.author_id;
                if author_id != caller {
                    return Err(AppError::Forbidden(
                        "You can only delete your own posts".to_string(),
                    ));
                }

                doc.posts.retain(|p| p.id != post_id);
                doc.comments.retain(|c| c.post_id != post_id);
                Ok(())
            })
            .await
    }

    /// Add the caller to the post's likes if absent, remove otherwise.
    pub async fn toggle_like(&self, post_id: Uuid, caller: Uuid) -> Result<LikeStatus> {
        self.store
            .update(move |doc| {
                let post = doc.post_mut(post_id).ok_or_else(post_not_found)?;

                let liked = match post.likes.iter().position(|id| *id == caller) {
                    Some(idx) => {
                        post.likes.remove(idx);
                        false
                    }
                    None => {
                        post.likes.push(caller);
                        true
                    }
                };

                Ok(LikeStatus {
                    likes_count: post.likes.len(),
                    liked,
                })
            })
            .await
    }
}

fn post_not_found() -> AppError {
    AppError::NotFound("Post not found".to_string())
}
