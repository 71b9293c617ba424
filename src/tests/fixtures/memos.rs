use crate::modules::memos::core::memo::{Memo, MemoId};
use crate::modules::memos::core::memo_text::MemoText;

pub fn make_memos(entries: &[(MemoId, &str)]) -> Vec<Memo> {
    entries
        .iter()
        .map(|(id, text)| Memo::new(*id, *text))
        .collect()
}

pub fn make_text(raw: &str) -> MemoText {
    MemoText::parse(Some(raw.to_string())).expect("fixture text must not be empty")
}
