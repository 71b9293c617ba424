use crate::modules::memos::core::decision::{DecideError, Decision};
use crate::modules::memos::core::memo::{Memo, MemoId};
use crate::modules::memos::use_cases::delete_memo::command::DeleteMemo;

pub fn decide_delete(mut memos: Vec<Memo>, command: DeleteMemo) -> Decision<MemoId> {
    let before = memos.len();
    memos.retain(|memo| memo.id != command.id);
    if memos.len() == before {
        return Decision::Rejected {
            reason: DecideError::NotFound(command.id),
        };
    }
    Decision::Accepted {
        memos,
        outcome: command.id,
    }
}
