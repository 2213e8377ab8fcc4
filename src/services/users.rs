use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::error::{AppError, Result};
use crate::models::User;
use crate::security::{hash_password, verify_password};
use crate::store::BlogStore;

pub struct UserService {
    store: Arc<BlogStore>,
}

impl UserService {
    pub fn new(store: Arc<BlogStore>) -> Self {
        Self { store }
    }

    /// Register a new user. Username and email must both be unused.
    pub async fn register(&self, username: &str, email: &str, password: &str) -> Result<User> {
        let password_hash = hash_password(password)?;
        let username = username.to_string();
        let email = email.to_string();

        self.store
            .update(move |doc| {
                if doc
                    .users
                    .iter()
                    .any(|u| u.username == username || u.email == email)
                {
                    return Err(AppError::Conflict(
                        "Username or email already registered".to_string(),
                    ));
                }

                let user = User {
                    id: Uuid::new_v4(),
                    username,
                    email,
                    password_hash,
                    bio: String::new(),
                    avatar_url: String::new(),
                    created_at: Utc::now(),
                };
                doc.users.push(user.clone());
                Ok(user)
            })
            .await
    }

    /// Look up a user by email or username and check the password.
    ///
    /// Unknown identifier and wrong password produce the same generic error.
    pub async fn authenticate(&self, email_or_username: &str, password: &str) -> Result<User> {
        let identifier = email_or_username.to_string();
        let user = self
            .store
            .read(move |doc| {
                doc.users
                    .iter()
                    .find(|u| u.email == identifier || u.username == identifier)
                    .cloned()
                    .ok_or_else(invalid_credentials)
            })
            .await?;

        if verify_password(password, &user.password_hash)? {
            Ok(user)
        } else {
            Err(invalid_credentials())
        }
    }

    pub async fn get(&self, id: Uuid) -> Result<User> {
        self.store
            .read(move |doc| {
                doc.user(id)
                    .cloned()
                    .ok_or_else(|| AppError::NotFound("User not found".to_string()))
            })
            .await
    }

    /// Partial profile update: only provided fields change.
    ///
    /// Changing the username re-checks uniqueness so a profile update cannot
    /// steal a name already held by another user.
    pub async fn update_profile(
        &self,
        caller: Uuid,
        username: Option<&str>,
        bio: Option<&str>,
        avatar_url: Option<&str>,
    ) -> Result<User> {
        let username = username.map(str::to_string);
        let bio = bio.map(str::to_string);
        let avatar_url = avatar_url.map(str::to_string);

        self.store
            .update(move |doc| {
                if doc.user(caller).is_none() {
                    return Err(AppError::NotFound("User not found".to_string()));
                }

                if let Some(name) = username.as_deref().filter(|n| !n.trim().is_empty()) {
                    let taken = doc
                        .users
                        .iter()
                        .any(|u| u.id != caller && u.username == name);
                    if taken {
                        return Err(AppError::Conflict(
                            "Username already registered".to_string(),
                        ));
                    }
                }

                let user = doc
                    .user_mut(caller)
                    .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

                if let Some(name) = username.filter(|n| !n.trim().is_empty()) {
                    user.username = name;
                }
                if let Some(bio) = bio {
                    user.bio = bio;
                }
                if let Some(avatar_url) = avatar_url {
                    user.avatar_url = avatar_url;
                }

                Ok(user.clone())
            })
            .await
    }
}

fn invalid_credentials() -> AppError {
    AppError::Authentication("Invalid credentials".to_string())
}
