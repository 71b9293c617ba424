use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    response::IntoResponse,
};

use crate::modules::memos::adapters::inbound::http::{
    MemoTextBody, error_response, parse_id, parse_text,
};
use crate::modules::memos::use_cases::update_memo::command::UpdateMemo;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    body: Result<Json<MemoTextBody>, JsonRejection>,
) -> impl IntoResponse {
    let text = match parse_text(body) {
        Ok(text) => text,
        Err(response) => return response,
    };
    let id = match parse_id(&raw_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match state.update_handler.handle(UpdateMemo { id, text }).await {
        Ok(memo) => Json(memo).into_response(),
        Err(e) => error_response(e),
    }
}
