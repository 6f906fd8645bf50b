use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use shopfront_admin::{StoreError, ValidationErrors};
use shopfront_catalog::SourceError;
use shopfront_core::DomainError;
use shopfront_feed::FeedError;

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::Validation(msg) => json_error(StatusCode::BAD_REQUEST, "validation_error", msg),
        DomainError::InvalidId(msg) => json_error(StatusCode::BAD_REQUEST, "invalid_id", msg),
        DomainError::NotFound => json_error(StatusCode::NOT_FOUND, "not_found", "not found"),
        DomainError::Upstream(msg) => json_error(StatusCode::BAD_GATEWAY, "upstream_error", msg),
        DomainError::Unauthorized => json_error(StatusCode::UNAUTHORIZED, "unauthorized", "unauthorized"),
    }
}

pub fn source_error_to_response(err: SourceError) -> axum::response::Response {
    match err {
        SourceError::Feed(msg) => {
            tracing::warn!("feed failure: {msg}");
            json_error(StatusCode::BAD_GATEWAY, "upstream_error", msg)
        }
        SourceError::Store(msg) => {
            tracing::error!("admin store failure: {msg}");
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "store_error", msg)
        }
    }
}

pub fn feed_error_to_response(err: FeedError) -> axum::response::Response {
    tracing::warn!("feed failure: {err}");
    json_error(StatusCode::BAD_GATEWAY, "upstream_error", err.to_string())
}

pub fn store_error_to_response(err: StoreError) -> axum::response::Response {
    tracing::error!("admin store failure: {err}");
    json_error(StatusCode::INTERNAL_SERVER_ERROR, "store_error", err.to_string())
}

/// 400 naming every offending field, so the form can highlight them.
pub fn validation_errors_to_response(err: ValidationErrors) -> axum::response::Response {
    (
        StatusCode::BAD_REQUEST,
        axum::Json(json!({
            "error": "validation_error",
            "message": "invalid product data",
            "fields": err.fields,
        })),
    )
        .into_response()
}
