use actix_web::{web, HttpResponse};
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;

use crate::error::Result;
use crate::middleware::UserId;
use crate::models::UserResponse;
use crate::services::UserService;
use crate::store::BlogStore;

#[derive(Debug, Deserialize)]
pub struct UpdateProfileRequest {
    pub username: Option<String>,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
}

/// Get the authenticated caller's own profile
/// GET /api/users/me
pub async fn get_current_user(
    store: web::Data<Arc<BlogStore>>,
    user_id: UserId,
) -> Result<HttpResponse> {
    let service = UserService::new(store.get_ref().clone());
    let user = service.get(user_id.0).await?;
    Ok(HttpResponse::Ok().json(UserResponse::from(&user)))
}

/// Update the caller's own profile; only provided fields change
/// PUT /api/users/me
pub async fn update_profile(
    store: web::Data<Arc<BlogStore>>,
    user_id: UserId,
    req: web::Json<UpdateProfileRequest>,
) -> Result<HttpResponse> {
    let service = UserService::new(store.get_ref().clone());
    let user = service
        .update_profile(
            user_id.0,
            req.username.as_deref(),
            req.bio.as_deref(),
            req.avatar_url.as_deref(),
        )
        .await?;

    Ok(HttpResponse::Ok().json(UserResponse::from(&user)))
}

/// Get a public profile by id
/// GET /api/users/{id}
pub async fn get_user(
    store: web::Data<Arc<BlogStore>>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let service = UserService::new(store.get_ref().clone());
    let user = service.get(*path).await?;
    Ok(HttpResponse::Ok().json(UserResponse::from(&user)))
}
