use crate::modules::memos::application::errors::ApplicationError;
use crate::modules::memos::core::decision::Decision;
use crate::modules::memos::core::memo::Memo;
use crate::modules::memos::use_cases::update_memo::command::UpdateMemo;
use crate::modules::memos::use_cases::update_memo::decide::decide_update;
use crate::shared::infrastructure::memo_store::MemoStore;
use std::sync::Arc;

pub struct UpdateMemoHandler<TStore>
where
    TStore: MemoStore + ?Sized + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> UpdateMemoHandler<TStore>
where
    TStore: MemoStore + ?Sized + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, command: UpdateMemo) -> Result<Memo, ApplicationError> {
        let _guard = self.store.write_lock().lock().await;
        let memos = self.store.read().await?;

        match decide_update(memos, command) {
            Decision::Accepted { memos, outcome } => {
                self.store.write(&memos).await?;
                tracing::info!(id = outcome.id, "memo updated");
                Ok(outcome)
            }
            Decision::Rejected { reason } => Err(reason.into()),
        }
    }
}
