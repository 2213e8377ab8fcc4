/// HTTP request handlers for blog-service
pub mod auth;
pub mod comments;
pub mod health;
pub mod posts;
pub mod users;

pub use auth::*;
pub use comments::*;
pub use health::*;
pub use posts::*;
pub use users::*;
