use crate::modules::memos::core::decision::{DecideError, Decision};
use crate::modules::memos::core::memo::Memo;
use crate::modules::memos::use_cases::update_memo::command::UpdateMemo;

pub fn decide_update(mut memos: Vec<Memo>, command: UpdateMemo) -> Decision<Memo> {
    let Some(memo) = memos.iter_mut().find(|memo| memo.id == command.id) else {
        return Decision::Rejected {
            reason: DecideError::NotFound(command.id),
        };
    };
    memo.text = command.text.into_inner();
    let outcome = memo.clone();
    Decision::Accepted { memos, outcome }
}
