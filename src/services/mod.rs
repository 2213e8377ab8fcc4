//! Domain operations over the document store.
//!
//! Each service wraps the shared [`BlogStore`](crate::store::BlogStore) and
//! enforces ownership and referential integrity; handlers stay thin.
//! Operations that require identity take the authenticated caller id as an
//! explicit parameter, never from ambient state.

pub mod comments;
pub mod posts;
pub mod users;

pub use comments::CommentService;
pub use posts::PostService;
pub use users::UserService;
