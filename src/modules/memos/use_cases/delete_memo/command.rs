use crate::modules::memos::core::memo::MemoId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteMemo {
    pub id: MemoId,
}
