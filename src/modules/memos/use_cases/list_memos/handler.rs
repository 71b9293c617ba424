use crate::modules::memos::application::errors::ApplicationError;
use crate::modules::memos::core::memo::Memo;
use crate::shared::infrastructure::memo_store::MemoStore;
use std::sync::Arc;

pub struct ListMemosHandler<TStore>
where
    TStore: MemoStore + ?Sized + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> ListMemosHandler<TStore>
where
    TStore: MemoStore + ?Sized + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self) -> Result<Vec<Memo>, ApplicationError> {
        Ok(self.store.read().await?)
    }
}
