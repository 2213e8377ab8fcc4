/// Post handlers - HTTP endpoints for post operations
use actix_web::{web, HttpResponse};
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;

use crate::error::Result;
use crate::middleware::UserId;
use crate::services::PostService;
use crate::store::BlogStore;

#[derive(Debug, Deserialize)]
pub struct CreatePostRequest {
    pub title: String,
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdatePostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
}

/// Create a new post
/// POST /api/posts
pub async fn create_post(
    store: web::Data<Arc<BlogStore>>,
    user_id: UserId,
    req: web::Json<CreatePostRequest>,
) -> Result<HttpResponse> {
    let service = PostService::new(store.get_ref().clone());
    let post = service
        .create_post(user_id.0, &req.title, &req.content)
        .await?;

    Ok(HttpResponse::Created().json(post))
}

/// List all posts newest-first with author summaries
/// GET /api/posts
pub async fn list_posts(store: web::Data<Arc<BlogStore>>) -> Result<HttpResponse> {
    let service = PostService::new(store.get_ref().clone());
    let posts = service.list_posts().await?;
    Ok(HttpResponse::Ok().json(posts))
}

/// Get a single post with author and comments
/// GET /api/posts/{id}
pub async fn get_post(
    store: web::Data<Arc<BlogStore>>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let service = PostService::new(store.get_ref().clone());
    let detail = service.get_post(*path).await?;
    Ok(HttpResponse::Ok().json(detail))
}

/// Update a post (author only)
/// PUT /api/posts/{id}
pub async fn update_post(
    store: web::Data<Arc<BlogStore>>,
    user_id: UserId,
    path: web::Path<Uuid>,
    req: web::Json<UpdatePostRequest>,
) -> Result<HttpResponse> {
    let service = PostService::new(store.get_ref().clone());
    let post = service
        .update_post(*path, user_id.0, req.title.as_deref(), req.content.as_deref())
        .await?;

    Ok(HttpResponse::Ok().json(post))
}

/// Delete a post and its comments (author only)
/// DELETE /api/posts/{id}
pub async fn delete_post(
    store: web::Data<Arc<BlogStore>>,
    user_id: UserId,
    path: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let service = PostService::new(store.get_ref().clone());
    service.delete_post(*path, user_id.0).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Toggle the caller's like on a post
/// POST /api/posts/{id}/like
pub async fn toggle_like(
    store: web::Data<Arc<BlogStore>>,
    user_id: UserId,
    path: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let service = PostService::new(store.get_ref().clone());
    let status = service.toggle_like(*path, user_id.0).await?;
    Ok(HttpResponse::Ok().json(status))
}
