use serde::{Deserialize, Serialize};

pub type MemoId = u64;

/// Field order is the serialized key order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Memo {
    pub id: MemoId,
    pub text: String,
}

impl Memo {
    pub fn new(id: MemoId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
        }
    }
}

/// `max(ids) + 1`, or `1` for an empty collection. `None` once the id space is used up.
pub fn next_id(memos: &[Memo]) -> Option<MemoId> {
    match memos.iter().map(|memo| memo.id).max() {
        Some(max) => max.checked_add(1),
        None => Some(1),
    }
}
