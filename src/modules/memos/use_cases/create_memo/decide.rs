use crate::modules::memos::core::decision::{DecideError, Decision};
use crate::modules::memos::core::memo::{Memo, MemoId, next_id};
use crate::modules::memos::use_cases::create_memo::command::CreateMemo;

pub fn decide_create(mut memos: Vec<Memo>, command: CreateMemo) -> Decision<Memo> {
    let Some(id) = next_id(&memos) else {
        return Decision::Rejected {
            reason: DecideError::IdsExhausted(MemoId::MAX),
        };
    };
    let memo = Memo::new(id, command.text.into_inner());
    memos.push(memo.clone());
    Decision::Accepted {
        memos,
        outcome: memo,
    }
}
