//! Route configuration
//!
//! Centralized route setup. Public reads stay outside the auth wrapper;
//! every mutating route sits behind the bearer-token middleware.

use std::sync::Arc;

use actix_web::web;

use crate::handlers;
use crate::middleware::JwtAuthMiddleware;
use crate::security::TokenSigner;

/// Configure all routes for the application
pub fn configure_routes(cfg: &mut web::ServiceConfig, signer: Arc<TokenSigner>) {
    cfg.route("/health", web::get().to(handlers::health_check))
        .service(
            web::scope("/api")
                .service(
                    web::scope("/auth")
                        .route("/register", web::post().to(handlers::register))
                        .route("/login", web::post().to(handlers::login)),
                )
                .service(
                    web::scope("/users/me")
                        .wrap(JwtAuthMiddleware::new(signer.clone()))
                        .route("", web::get().to(handlers::get_current_user))
                        .route("", web::put().to(handlers::update_profile)),
                )
                .service(
                    web::scope("/users").route("/{id}", web::get().to(handlers::get_user)),
                )
                .service(
                    web::scope("/posts")
                        .route("", web::get().to(handlers::list_posts))
                        .route("/{id}", web::get().to(handlers::get_post))
                        .service(
                            web::scope("")
                                .wrap(JwtAuthMiddleware::new(signer.clone()))
                                .route("", web::post().to(handlers::create_post))
                                .route("/{id}", web::put().to(handlers::update_post))
                                .route("/{id}", web::delete().to(handlers::delete_post))
                                .route("/{id}/like", web::post().to(handlers::toggle_like))
                                .route(
                                    "/{post_id}/comments",
                                    web::post().to(handlers::add_comment),
                                ),
                        ),
                )
                .service(
                    web::scope("/comments")
                        .wrap(JwtAuthMiddleware::new(signer))
                        .route("/{comment_id}", web::delete().to(handlers::delete_comment)),
                ),
        );
}
