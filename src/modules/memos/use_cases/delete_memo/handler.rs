use crate::modules::memos::application::errors::ApplicationError;
use crate::modules::memos::core::decision::Decision;
use crate::modules::memos::use_cases::delete_memo::command::DeleteMemo;
use crate::modules::memos::use_cases::delete_memo::decide::decide_delete;
use crate::shared::infrastructure::memo_store::MemoStore;
use std::sync::Arc;

pub struct DeleteMemoHandler<TStore>
where
    TStore: MemoStore + ?Sized + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> DeleteMemoHandler<TStore>
where
    TStore: MemoStore + ?Sized + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, command: DeleteMemo) -> Result<(), ApplicationError> {
        let _guard = self.store.write_lock().lock().await;
        let memos = self.store.read().await?;

        match decide_delete(memos, command) {
            Decision::Accepted { memos, outcome } => {
                self.store.write(&memos).await?;
                tracing::info!(id = outcome, "memo deleted");
                Ok(())
            }
            Decision::Rejected { reason } => Err(reason.into()),
        }
    }
}
