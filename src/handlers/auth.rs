use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use validator::Validate;

use crate::error::Result;
use crate::models::UserResponse;
use crate::security::TokenSigner;
use crate::services::UserService;
use crate::store::BlogStore;

#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 3, max = 50))]
    pub username: String,

    #[validate(email)]
    pub email: String,

    #[validate(length(min = 8))]
    pub password: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    /// Either the email address or the username.
    #[validate(length(min = 1))]
    pub email_or_username: String,

    #[validate(length(min = 1))]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserResponse,
}

/// Register a new account and issue a session token
/// POST /api/auth/register
pub async fn register(
    store: web::Data<Arc<BlogStore>>,
    signer: web::Data<Arc<TokenSigner>>,
    req: web::Json<RegisterRequest>,
) -> Result<HttpResponse> {
    req.validate()?;

    let service = UserService::new(store.get_ref().clone());
    let user = service
        .register(&req.username, &req.email, &req.password)
        .await?;

    let token = signer.issue(user.id)?;

    Ok(HttpResponse::Created().json(AuthResponse {
        token,
        user: UserResponse::from(&user),
    }))
}

/// Exchange credentials for a session token
/// POST /api/auth/login
pub async fn login(
    store: web::Data<Arc<BlogStore>>,
    signer: web::Data<Arc<TokenSigner>>,
    req: web::Json<LoginRequest>,
) -> Result<HttpResponse> {
    req.validate()?;

    let service = UserService::new(store.get_ref().clone());
    let user = service
        .authenticate(&req.email_or_username, &req.password)
        .await?;

    let token = signer.issue(user.id)?;

    Ok(HttpResponse::Ok().json(AuthResponse {
        token,
        user: UserResponse::from(&user),
    }))
}
