use crate::modules::memos::use_cases::create_memo::handler::CreateMemoHandler;
use crate::modules::memos::use_cases::delete_memo::handler::DeleteMemoHandler;
use crate::modules::memos::use_cases::list_memos::handler::ListMemosHandler;
use crate::modules::memos::use_cases::update_memo::handler::UpdateMemoHandler;
use crate::shared::infrastructure::memo_store::MemoStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub list_handler: Arc<ListMemosHandler<dyn MemoStore>>,
    pub create_handler: Arc<CreateMemoHandler<dyn MemoStore>>,
    pub update_handler: Arc<UpdateMemoHandler<dyn MemoStore>>,
    pub delete_handler: Arc<DeleteMemoHandler<dyn MemoStore>>,
}

impl AppState {
    /// All handlers share one store, and with it the store's write lock.
    pub fn new(store: Arc<dyn MemoStore>) -> Self {
        Self {
            list_handler: Arc::new(ListMemosHandler::new(store.clone())),
            create_handler: Arc::new(CreateMemoHandler::new(store.clone())),
            update_handler: Arc::new(UpdateMemoHandler::new(store.clone())),
            delete_handler: Arc::new(DeleteMemoHandler::new(store)),
        }
    }
}
