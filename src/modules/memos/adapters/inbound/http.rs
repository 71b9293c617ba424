// Shared pieces of the memo HTTP inbound adapters: request body shape and error mapping.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::modules::memos::application::errors::ApplicationError;
use crate::modules::memos::core::decision::DecideError;
use crate::modules::memos::core::memo::MemoId;
use crate::modules::memos::core::memo_text::MemoText;

#[derive(Deserialize)]
pub struct MemoTextBody {
    pub text: Option<String>,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}

pub fn error_body(status: StatusCode, error: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: error.into(),
        }),
    )
        .into_response()
}

pub fn error_response(err: ApplicationError) -> Response {
    let status = match &err {
        ApplicationError::Rejected(DecideError::EmptyText) => StatusCode::BAD_REQUEST,
        ApplicationError::Rejected(DecideError::NotFound(_)) => StatusCode::NOT_FOUND,
        ApplicationError::Rejected(DecideError::IdsExhausted(_)) => {
            tracing::error!(error = %err, "memo id space exhausted");
            StatusCode::INTERNAL_SERVER_ERROR
        }
        ApplicationError::Store(e) => {
            tracing::error!(error = %e, "memo store failure");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    error_body(status, err.to_string())
}

/// An unreadable body is treated like a missing text.
pub fn parse_text(body: Result<Json<MemoTextBody>, JsonRejection>) -> Result<MemoText, Response> {
    match body {
        Ok(Json(body)) => MemoText::parse(body.text).map_err(|e| error_response(e.into())),
        Err(rejection) => Err(error_body(StatusCode::BAD_REQUEST, rejection.body_text())),
    }
}

/// A path segment that is not an id can never match a memo.
pub fn parse_id(raw: &str) -> Result<MemoId, Response> {
    raw.parse::<MemoId>()
        .map_err(|_| error_body(StatusCode::NOT_FOUND, format!("memo {raw} not found")))
}
