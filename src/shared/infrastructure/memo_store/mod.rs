// Port for persisting the memo collection as a whole.
//
// Responsibilities
// - Load the full collection; an absent store is an empty collection.
// - Replace the full collection on write.
// - Hand out the per-store lock that mutating handlers hold across a read-modify-write cycle.

use crate::modules::memos::core::memo::Memo;
use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::Mutex;

#[derive(Debug, Error)]
pub enum MemoStoreError {
    #[error("corrupt state: {0}")]
    CorruptState(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

#[async_trait]
pub trait MemoStore: Send + Sync {
    async fn read(&self) -> Result<Vec<Memo>, MemoStoreError>;
    async fn write(&self, memos: &[Memo]) -> Result<(), MemoStoreError>;
    fn write_lock(&self) -> &Mutex<()>;
}

pub mod in_memory;
pub mod json_file;
