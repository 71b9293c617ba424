use crate::modules::memos::core::memo::{Memo, MemoId};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("memo text is missing")]
    EmptyText,

    #[error("memo {0} not found")]
    NotFound(MemoId),

    #[error("no memo id left after {0}")]
    IdsExhausted(MemoId),
}

/// Outcome of a pure transformation over the loaded collection.
/// `memos` is the full collection to persist when accepted.
#[derive(Debug)]
pub enum Decision<T> {
    Accepted { memos: Vec<Memo>, outcome: T },
    Rejected { reason: DecideError },
}
