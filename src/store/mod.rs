//! Flat-file document store.
//!
//! The entire application state is one JSON [`Document`] rewritten in full on
//! every mutation. A single async mutex serializes every load→mutate→save
//! cycle, so two concurrent writers cannot lose each other's updates. The
//! rewrite goes through a temp file plus rename: a failed save leaves the
//! previously persisted document intact.

use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tokio::fs;
use tokio::sync::Mutex;

use crate::error::Result;
use crate::models::Document;

pub struct BlogStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl BlogStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the backing document.
    ///
    /// A missing or unreadable file yields an empty document. This is the
    /// recovery policy, not error tolerance: the file is the whole source of
    /// truth and there is no partial recovery to attempt.
    pub async fn load(&self) -> Result<Document> {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no backing file, starting empty");
                return Ok(Document::default());
            }
            Err(err) => {
                tracing::warn!(path = %self.path.display(), error = %err, "failed to read backing file, starting empty");
                return Ok(Document::default());
            }
        };

        match serde_json::from_slice(&bytes) {
            Ok(doc) => Ok(doc),
            Err(err) => {
                tracing::warn!(path = %self.path.display(), error = %err, "corrupt backing file, starting empty");
                Ok(Document::default())
            }
        }
    }

    /// Rewrite the backing file with the given document.
    ///
    /// Writes to `<path>.tmp` and renames over the target so a failure
    /// propagates without clobbering the prior state.
    pub async fn save(&self, doc: &Document) -> Result<()> {
        let json = serde_json::to_vec_pretty(doc)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }

        let tmp = self.tmp_path();
        fs::write(&tmp, &json).await?;
        fs::rename(&tmp, &self.path).await?;
        Ok(())
    }

    /// Run a read-only operation against a consistent snapshot.
    pub async fn read<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Document) -> Result<T>,
    {
        let _guard = self.lock.lock().await;
        let doc = self.load().await?;
        f(&doc)
    }

    /// Atomic read-modify-write: load, apply the mutation, persist.
    ///
    /// If the mutation fails, nothing is written.
    pub async fn update<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut Document) -> Result<T>,
    {
        let _guard = self.lock.lock().await;
        let mut doc = self.load().await?;
        let out = f(&mut doc)?;
        self.save(&doc).await?;
        Ok(out)
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name: OsString = self.path.as_os_str().to_owned();
        name.push(".tmp");
        PathBuf::from(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::models::User;
    use chrono::Utc;
    use uuid::Uuid;

    fn store_in(dir: &tempfile::TempDir) -> BlogStore {
        BlogStore::new(dir.path().join("db.json"))
    }

    fn sample_user(username: &str) -> User {
        User {
            id: Uuid::new_v4(),
            username: username.to_string(),
            email: format!("{username}@example.com"),
            password_hash: "$argon2id$test".to_string(),
            bio: String::new(),
            avatar_url: String::new(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn path_reports_the_backing_file() {
        let store = BlogStore::new("data/db.json");
        assert_eq!(store.path(), Path::new("data/db.json"));
    }

    #[tokio::test]
    async fn load_missing_file_returns_empty_document() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let doc = store.load().await.unwrap();
        assert!(doc.users.is_empty());
        assert!(doc.posts.is_empty());
        assert!(doc.comments.is_empty());
    }

    #[tokio::test]
    async fn load_corrupt_file_returns_empty_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("db.json");
        std::fs::write(&path, b"{not json at all").unwrap();

        let store = BlogStore::new(path);
        let doc = store.load().await.unwrap();
        assert!(doc.users.is_empty());
    }

    #[tokio::test]
    async fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let mut doc = Document::default();
        doc.users.push(sample_user("alice"));
        store.save(&doc).await.unwrap();

        let reloaded = store.load().await.unwrap();
        assert_eq!(reloaded.users.len(), 1);
        assert_eq!(reloaded.users[0].username, "alice");
        assert_eq!(reloaded.users[0].id, doc.users[0].id);

        // An immediate re-save of the loaded document is equivalent.
        store.save(&reloaded).await.unwrap();
        let again = store.load().await.unwrap();
        assert_eq!(again.users[0].id, doc.users[0].id);
    }

    #[tokio::test]
    async fn update_persists_mutation() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let id = store
            .update(|doc| {
                let user = sample_user("bob");
                let id = user.id;
                doc.users.push(user);
                Ok(id)
            })
            .await
            .unwrap();

        let doc = store.load().await.unwrap();
        assert_eq!(doc.users.len(), 1);
        assert_eq!(doc.users[0].id, id);
    }

    #[tokio::test]
    async fn failed_update_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let mut doc = Document::default();
        doc.users.push(sample_user("carol"));
        store.save(&doc).await.unwrap();

        let result: Result<()> = store
            .update(|doc| {
                doc.users.clear();
                Err(AppError::Validation("rejected".to_string()))
            })
            .await;
        assert!(result.is_err());

        let reloaded = store.load().await.unwrap();
        assert_eq!(reloaded.users.len(), 1, "prior state must survive a failed update");
    }
}
