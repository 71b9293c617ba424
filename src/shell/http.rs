use axum::{
    Router,
    routing::{get, put},
};
use tower_http::trace::TraceLayer;

use crate::modules::memos::use_cases::create_memo::inbound::http as create_http;
use crate::modules::memos::use_cases::delete_memo::inbound::http as delete_http;
use crate::modules::memos::use_cases::list_memos::inbound::http as list_http;
use crate::modules::memos::use_cases::update_memo::inbound::http as update_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/memo", get(list_http::handle).post(create_http::handle))
        .route(
            "/memo/{id}",
            put(update_http::handle).delete(delete_http::handle),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
