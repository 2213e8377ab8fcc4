use actix_web::{web, HttpResponse};
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;

use crate::error::Result;
use crate::middleware::UserId;
use crate::services::CommentService;
use crate::store::BlogStore;

#[derive(Debug, Deserialize)]
pub struct CreateCommentRequest {
    pub text: String,
}

/// Add a comment to a post
/// POST /api/posts/{post_id}/comments
pub async fn add_comment(
    store: web::Data<Arc<BlogStore>>,
    user_id: UserId,
    path: web::Path<Uuid>,
    req: web::Json<CreateCommentRequest>,
) -> Result<HttpResponse> {
    let service = CommentService::new(store.get_ref().clone());
    let comment = service.add_comment(*path, user_id.0, &req.text).await?;
    Ok(HttpResponse::Created().json(comment))
}

/// Delete a comment (author only)
/// DELETE /api/comments/{comment_id}
pub async fn delete_comment(
    store: web::Data<Arc<BlogStore>>,
    user_id: UserId,
    path: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let service = CommentService::new(store.get_ref().clone());
    service.delete_comment(*path, user_id.0).await?;
    Ok(HttpResponse::NoContent().finish())
}
