use axum::{Router, routing::get};

pub mod admin;
pub mod categories;
pub mod products;
pub mod system;

/// Router for the public storefront endpoints.
pub fn public_router() -> Router {
    Router::new()
        .route("/products", get(products::list_products))
        .route("/products/featured", get(products::featured_products))
        .route("/products/:id", get(products::get_product))
        .route("/categories", get(categories::list_categories))
}

/// Router for the authenticated admin endpoints.
pub fn admin_router() -> Router {
    Router::new()
        .route("/auth/user", get(system::current_user))
        .route(
            "/admin/products",
            get(admin::list_own_products).post(admin::create_product),
        )
}
