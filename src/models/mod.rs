//! Data models for blog-service
//!
//! Persisted entities (`User`, `Post`, `Comment`) live inside a single
//! [`Document`], the unit the store loads and rewrites as a whole. Outward
//! representations are separate structs so the password hash can never leak
//! into a response body.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub bio: String,
    pub avatar_url: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub author_id: Uuid,
    pub title: String,
    pub content: String,
    /// User ids that liked this post, each at most once.
    pub likes: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub id: Uuid,
    pub post_id: Uuid,
    pub author_id: Uuid,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

/// The whole persisted state. Posts are kept newest-first, comments in
/// insertion order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Document {
    pub users: Vec<User>,
    pub posts: Vec<Post>,
    pub comments: Vec<Comment>,
}

impl Document {
    pub fn user(&self, id: Uuid) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    pub fn user_mut(&mut self, id: Uuid) -> Option<&mut User> {
        self.users.iter_mut().find(|u| u.id == id)
    }

    pub fn post(&self, id: Uuid) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == id)
    }

    pub fn post_mut(&mut self, id: Uuid) -> Option<&mut Post> {
        self.posts.iter_mut().find(|p| p.id == id)
    }

    pub fn comment(&self, id: Uuid) -> Option<&Comment> {
        self.comments.iter().find(|c| c.id == id)
    }

    /// Minimal author projection embedded in post/comment responses.
    ///
    /// Authors are never deleted by this system, but a document edited out of
    /// band may hold dangling author ids; those render as "unknown".
    pub fn author_summary(&self, author_id: Uuid) -> AuthorSummary {
        match self.user(author_id) {
            Some(user) => AuthorSummary {
                id: user.id,
                username: user.username.clone(),
                avatar_url: user.avatar_url.clone(),
            },
            None => AuthorSummary {
                id: author_id,
                username: "unknown".to_string(),
                avatar_url: String::new(),
            },
        }
    }
}

// ============================================
// Outward representations
// ============================================

/// Public view of a user. Deliberately has no password field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub bio: String,
    pub avatar_url: String,
    pub created_at: DateTime<Utc>,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        UserResponse {
            id: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
            bio: user.bio.clone(),
            avatar_url: user.avatar_url.clone(),
            created_at: user.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorSummary {
    pub id: Uuid,
    pub username: String,
    pub avatar_url: String,
}

/// Post with its denormalized author, as returned by listings.
#[derive(Debug, Clone, Serialize)]
pub struct PostView {
    #[serde(flatten)]
    pub post: Post,
    pub author: AuthorSummary,
}

/// Single-post view: post, author, and all comments in insertion order.
#[derive(Debug, Clone, Serialize)]
pub struct PostDetail {
    #[serde(flatten)]
    pub post: Post,
    pub author: AuthorSummary,
    pub comments: Vec<CommentView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CommentView {
    #[serde(flatten)]
    pub comment: Comment,
    pub author: AuthorSummary,
}

/// Result of a like toggle.
#[derive(Debug, Clone, Serialize)]
pub struct LikeStatus {
    pub likes_count: usize,
    pub liked: bool,
}
