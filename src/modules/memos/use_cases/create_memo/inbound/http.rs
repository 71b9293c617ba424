use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};

use crate::modules::memos::adapters::inbound::http::{MemoTextBody, error_response, parse_text};
use crate::modules::memos::use_cases::create_memo::command::CreateMemo;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<MemoTextBody>, JsonRejection>,
) -> impl IntoResponse {
    let text = match parse_text(body) {
        Ok(text) => text,
        Err(response) => return response,
    };

    match state.create_handler.handle(CreateMemo { text }).await {
        Ok(memo) => (StatusCode::CREATED, Json(memo)).into_response(),
        Err(e) => error_response(e),
    }
}
