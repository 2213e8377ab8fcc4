//! Identity and credential management: password hashing and session tokens.

pub mod password;
pub mod token;

pub use password::{hash_password, verify_password};
pub use token::TokenSigner;
