use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use std::io;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use blog_service::config::Config;
use blog_service::routes;
use blog_service::security::TokenSigner;
use blog_service::store::BlogStore;

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().expect("Failed to load configuration");

    tracing::info!("Starting blog-service v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Environment: {}", config.app.env);

    let store = Arc::new(BlogStore::new(&config.store.data_file));
    let signer = Arc::new(TokenSigner::new(&config.auth.jwt_secret));

    tracing::info!("Backing file: {}", store.path().display());

    let bind_addr = format!("{}:{}", config.app.host, config.app.port);
    tracing::info!("Listening on {}", bind_addr);

    let allowed_origins = config.cors.allowed_origins.clone();

    HttpServer::new(move || {
        let mut cors = Cors::default();
        for origin in allowed_origins.split(',') {
            let origin = origin.trim();
            if origin == "*" {
                cors = cors.allow_any_origin();
            } else if !origin.is_empty() {
                cors = cors.allowed_origin(origin);
            }
        }
        cors = cors.allow_any_method().allow_any_header().max_age(3600);

        let route_signer = signer.clone();

        App::new()
            .wrap(Logger::default())
            .wrap(cors)
            .app_data(web::Data::new(store.clone()))
            .app_data(web::Data::new(signer.clone()))
            .configure(move |cfg| routes::configure_routes(cfg, route_signer))
    })
    .bind(&bind_addr)?
    .run()
    .await
}
