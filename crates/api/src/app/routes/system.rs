use axum::{Json, extract::Extension, http::StatusCode, response::IntoResponse};

use crate::context::UserContext;

pub async fn health() -> StatusCode {
    StatusCode::OK
}

/// The authenticated user's identity, as the admin shell displays it.
pub async fn current_user(Extension(user): Extension<UserContext>) -> impl IntoResponse {
    Json(serde_json::json!({
        "id": user.user_id().to_string(),
        "email": user.email(),
        "name": user.name(),
    }))
}
