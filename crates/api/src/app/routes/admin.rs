use std::sync::Arc;

use axum::{
    Json,
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
};

use crate::app::{dto, errors};
use crate::app::services::AppServices;
use crate::context::UserContext;

/// Admin listings owned by the caller.
pub async fn list_own_products(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(user): Extension<UserContext>,
) -> axum::response::Response {
    match services.admin_store().list_by_owner(user.user_id()).await {
        Ok(items) => (StatusCode::OK, Json(serde_json::json!({ "items": items }))).into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}

/// Validate and persist a new admin listing.
pub async fn create_product(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(user): Extension<UserContext>,
    Json(body): Json<dto::CreateAdminProductRequest>,
) -> axum::response::Response {
    let record = body.into_record();

    if let Err(e) = record.validate() {
        return errors::validation_errors_to_response(e);
    }

    match services.admin_store().create(record, user.user_id()).await {
        Ok(product) => (StatusCode::CREATED, Json(product)).into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}
