use axum::{Json, extract::State, response::IntoResponse};

use crate::modules::memos::adapters::inbound::http::error_response;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>) -> impl IntoResponse {
    match state.list_handler.handle().await {
        Ok(memos) => Json(memos).into_response(),
        Err(e) => error_response(e),
    }
}
