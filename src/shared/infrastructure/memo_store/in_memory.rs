use crate::modules::memos::core::memo::Memo;
use crate::shared::infrastructure::memo_store::{MemoStore, MemoStoreError};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use tokio::sync::{Mutex, RwLock};
use tokio::time::{Duration, sleep};

#[derive(Default)]
pub struct InMemoryMemoStore {
    memos: RwLock<Vec<Memo>>,
    lock: Mutex<()>,
    writes: AtomicU64,
    delay_read_ms: AtomicU64,
    fail_writes: AtomicBool,
    is_offline: bool,
}

impl InMemoryMemoStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_memos(memos: Vec<Memo>) -> Self {
        Self {
            memos: RwLock::new(memos),
            ..Self::default()
        }
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    pub fn set_delay_read_ms(&self, ms: u64) {
        self.delay_read_ms.store(ms, Ordering::SeqCst);
    }

    /// Reads keep working; every write fails.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    pub fn write_count(&self) -> u64 {
        self.writes.load(Ordering::SeqCst)
    }

    pub async fn snapshot(&self) -> Vec<Memo> {
        self.memos.read().await.clone()
    }

    fn offline_error() -> MemoStoreError {
        MemoStoreError::Io(std::io::Error::other("Memo store offline"))
    }
}

#[async_trait::async_trait]
impl MemoStore for InMemoryMemoStore {
    async fn read(&self) -> Result<Vec<Memo>, MemoStoreError> {
        if self.is_offline {
            return Err(Self::offline_error());
        }
        let memos = self.memos.read().await.clone();
        let delay = self.delay_read_ms.load(Ordering::SeqCst);
        if delay > 0 {
            sleep(Duration::from_millis(delay)).await;
        }
        Ok(memos)
    }

    async fn write(&self, memos: &[Memo]) -> Result<(), MemoStoreError> {
        if self.is_offline {
            return Err(Self::offline_error());
        }
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(MemoStoreError::Io(std::io::Error::other("Memo store rejected write")));
        }
        *self.memos.write().await = memos.to_vec();
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn write_lock(&self) -> &Mutex<()> {
        &self.lock
    }
}
