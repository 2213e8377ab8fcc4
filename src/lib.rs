/// Blog Service Library
///
/// A minimal blogging backend: registration/login, profile editing, post
/// CRUD, likes, and comments, persisted to a single JSON file.
///
/// # Modules
///
/// - `store`: Flat-file document store with atomic read-modify-write
/// - `security`: Password hashing and session tokens
/// - `services`: Domain operations enforcing ownership and integrity
/// - `handlers`: HTTP request handlers
/// - `middleware`: Bearer-token authentication
/// - `models`: Persisted entities and outward representations
/// - `routes`: Route configuration
/// - `error`: Error types and HTTP mapping
/// - `config`: Configuration management
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod security;
pub mod services;
pub mod store;

pub use config::Config;
pub use error::{AppError, Result};
