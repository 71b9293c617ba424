// JSON file implementation of the MemoStore port.
//
// Responsibilities
// - Keep the whole collection in one pretty-printed JSON array.
// - Treat a missing file as an empty collection.
// - Replace the file atomically: write a sibling temp file, sync it, then rename it over the target.

use crate::modules::memos::core::memo::Memo;
use crate::shared::infrastructure::memo_store::{MemoStore, MemoStoreError};
use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;
use uuid::Uuid;

pub struct JsonFileMemoStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonFileMemoStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = OsString::from(".");
        name.push(self.path.file_name().unwrap_or_default());
        name.push(format!(".{}.tmp", Uuid::now_v7()));
        self.path.with_file_name(name)
    }

    async fn ensure_parent_exists(&self) -> Result<(), MemoStoreError> {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => {
                fs::create_dir_all(parent).await?;
                Ok(())
            }
            _ => Ok(()),
        }
    }

    async fn write_temp(temp: &Path, content: &[u8]) -> std::io::Result<()> {
        let mut file = fs::File::create(temp).await?;
        file.write_all(content).await?;
        file.sync_all().await?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl MemoStore for JsonFileMemoStore {
    async fn read(&self) -> Result<Vec<Memo>, MemoStoreError> {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "memo file absent, starting empty");
                return Ok(Vec::new());
            }
            Err(e) => return Err(MemoStoreError::Io(e)),
        };
        let memos: Vec<Memo> = serde_json::from_slice(&bytes)
            .map_err(|e| MemoStoreError::CorruptState(format!("{}: {e}", self.path.display())))?;
        tracing::debug!(path = %self.path.display(), count = memos.len(), "memos loaded");
        Ok(memos)
    }

    async fn write(&self, memos: &[Memo]) -> Result<(), MemoStoreError> {
        let content = serde_json::to_vec_pretty(memos)
            .map_err(|e| MemoStoreError::Io(std::io::Error::other(e)))?;
        self.ensure_parent_exists().await?;

        let temp = self.temp_path();
        if let Err(e) = Self::write_temp(&temp, &content).await {
            let _ = fs::remove_file(&temp).await;
            return Err(MemoStoreError::Io(e));
        }
        if let Err(e) = fs::rename(&temp, &self.path).await {
            let _ = fs::remove_file(&temp).await;
            return Err(MemoStoreError::Io(e));
        }
        tracing::debug!(path = %self.path.display(), count = memos.len(), "memos written");
        Ok(())
    }

    fn write_lock(&self) -> &Mutex<()> {
        &self.lock
    }
}
