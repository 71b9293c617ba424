use crate::modules::memos::core::memo_text::MemoText;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateMemo {
    pub text: MemoText,
}
