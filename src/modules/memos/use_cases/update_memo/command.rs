use crate::modules::memos::core::memo::MemoId;
use crate::modules::memos::core::memo_text::MemoText;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateMemo {
    pub id: MemoId,
    pub text: MemoText,
}
