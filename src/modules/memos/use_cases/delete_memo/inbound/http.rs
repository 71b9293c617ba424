use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};

use crate::modules::memos::adapters::inbound::http::{MessageResponse, error_response, parse_id};
use crate::modules::memos::use_cases::delete_memo::command::DeleteMemo;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> impl IntoResponse {
    let id = match parse_id(&raw_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match state.delete_handler.handle(DeleteMemo { id }).await {
        Ok(()) => Json(MessageResponse {
            message: "memo deleted".to_string(),
        })
        .into_response(),
        Err(e) => error_response(e),
    }
}
