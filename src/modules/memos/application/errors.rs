use crate::modules::memos::core::decision::DecideError;
use crate::shared::infrastructure::memo_store::MemoStoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Rejected(#[from] DecideError),

    #[error(transparent)]
    Store(#[from] MemoStoreError),
}
