use axum::{
    Json, Router, extract::Path, http::StatusCode as AxumStatusCode, response::IntoResponse,
    routing::get,
};
use chrono::{Duration as ChronoDuration, Utc};
use jsonwebtoken::{Algorithm, EncodingKey, Header};
use reqwest::StatusCode;
use serde_json::{Value, json};

use shopfront_auth::JwtClaims;
use shopfront_cart::Cart;
use shopfront_core::{Product, UserId};

fn stub_products() -> Value {
    json!([
        {
            "id": 1,
            "title": "Fjallraven Backpack",
            "price": 10.0,
            "description": "Fits 15-inch laptops",
            "category": "electronics",
            "image": "https://example.com/backpack.jpg",
            "rating": { "rate": 3.9, "count": 120 }
        },
        {
            "id": 2,
            "title": "Gold Chain",
            "price": 60.0,
            "description": "Plated chain necklace",
            "category": "jewelery",
            "image": "https://example.com/chain.jpg",
            "rating": { "rate": 4.6, "count": 70 }
        },
        {
            "id": 3,
            "title": "Cotton Jacket",
            "price": 25.0,
            "description": "Great outerwear jacket",
            "category": "electronics",
            "image": "https://example.com/jacket.jpg",
            "rating": { "rate": 4.1, "count": 259 }
        }
    ])
}

/// Local stand-in for the external product feed.
struct StubFeed {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl StubFeed {
    async fn spawn() -> Self {
        let app = Router::new()
            .route("/products", get(|| async { Json(stub_products()) }))
            .route(
                "/products/categories",
                get(|| async { Json(json!(["electronics", "jewelery"])) }),
            )
            .route(
                "/products/:id",
                get(|Path(id): Path<u64>| async move {
                    let products = stub_products();
                    match products
                        .as_array()
                        .and_then(|items| items.iter().find(|p| p["id"] == id).cloned())
                    {
                        Some(product) => Json(product).into_response(),
                        None => (
                            AxumStatusCode::NOT_FOUND,
                            Json(json!({ "message": "not found" })),
                        )
                            .into_response(),
                    }
                }),
            );

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind stub feed");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }
}

impl Drop for StubFeed {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn(jwt_secret: &str, feed_base_url: &str) -> Self {
        // Build app (same router as prod), but bind to an ephemeral port.
        let app =
            shopfront_api::app::build_app(jwt_secret.to_string(), feed_base_url.to_string()).await;
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

fn mint_jwt(jwt_secret: &str, user_id: UserId) -> String {
    let now = Utc::now();
    let claims = JwtClaims {
        sub: user_id,
        email: "admin@example.com".to_string(),
        name: "Admin".to_string(),
        issued_at: now,
        expires_at: now + ChronoDuration::minutes(10),
    };

    jsonwebtoken::encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(jwt_secret.as_bytes()),
    )
    .expect("failed to encode jwt")
}

fn valid_listing(title: &str) -> Value {
    json!({
        "title": title,
        "price": 24.0,
        "description": "Hand-thrown stoneware mug.",
        "category": "home",
        "image": "https://example.com/mug.jpg"
    })
}

#[tokio::test]
async fn health_is_public() {
    let feed = StubFeed::spawn().await;
    let srv = TestServer::spawn("test-secret", &feed.base_url).await;

    let res = reqwest::get(format!("{}/health", srv.base_url)).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn merged_catalog_lists_admin_products_first() {
    let jwt_secret = "test-secret";
    let feed = StubFeed::spawn().await;
    let srv = TestServer::spawn(jwt_secret, &feed.base_url).await;

    let client = reqwest::Client::new();
    let token = mint_jwt(jwt_secret, UserId::new());

    let res = client
        .post(format!("{}/admin/products", srv.base_url))
        .bearer_auth(&token)
        .json(&valid_listing("Stoneware Mug"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    let created: Value = res.json().await.unwrap();
    assert!(created["id"].as_u64().unwrap() >= 10_000);

    let res = client
        .get(format!("{}/products", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body: Value = res.json().await.unwrap();
    let items = body["items"].as_array().unwrap();
    assert_eq!(items.len(), 4);

    assert_eq!(items[0]["title"], "Stoneware Mug");
    assert_eq!(items[0]["source"], "admin");
    assert_eq!(items[0]["rating"]["rate"], 0.0);
    for item in &items[1..] {
        assert_eq!(item["source"], "catalog");
    }
}

#[tokio::test]
async fn product_lookup_checks_admin_store_then_feed() {
    let jwt_secret = "test-secret";
    let feed = StubFeed::spawn().await;
    let srv = TestServer::spawn(jwt_secret, &feed.base_url).await;

    let client = reqwest::Client::new();
    let token = mint_jwt(jwt_secret, UserId::new());

    let res = client
        .post(format!("{}/admin/products", srv.base_url))
        .bearer_auth(&token)
        .json(&valid_listing("Stoneware Mug"))
        .send()
        .await
        .unwrap();
    let created: Value = res.json().await.unwrap();
    let admin_id = created["id"].as_u64().unwrap();

    // Admin-authored listing resolves by id.
    let res = client
        .get(format!("{}/products/{}", srv.base_url, admin_id))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["source"], "admin");

    // Feed product resolves by id.
    let res = client
        .get(format!("{}/products/2", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["title"], "Gold Chain");
    assert_eq!(body["source"], "catalog");

    // Absent from both sources: explicit not-found.
    let res = client
        .get(format!("{}/products/99999", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "not_found");

    // Non-numeric ids are rejected before any lookup.
    let res = client
        .get(format!("{}/products/abc", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn featured_strip_serves_feed_products_only() {
    let feed = StubFeed::spawn().await;
    let srv = TestServer::spawn("test-secret", &feed.base_url).await;

    let res = reqwest::get(format!("{}/products/featured", srv.base_url))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body: Value = res.json().await.unwrap();
    let items = body["items"].as_array().unwrap();
    assert_eq!(items.len(), 3);
    assert!(items.iter().all(|p| p["source"] == "catalog"));
}

#[tokio::test]
async fn categories_come_from_the_feed() {
    let feed = StubFeed::spawn().await;
    let srv = TestServer::spawn("test-secret", &feed.base_url).await;

    let res = reqwest::get(format!("{}/categories", srv.base_url))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body: Value = res.json().await.unwrap();
    assert_eq!(body["items"], json!(["electronics", "jewelery"]));
}

#[tokio::test]
async fn admin_routes_require_auth() {
    let feed = StubFeed::spawn().await;
    let srv = TestServer::spawn("test-secret", &feed.base_url).await;

    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/admin/products", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    let res = client
        .post(format!("{}/admin/products", srv.base_url))
        .json(&valid_listing("No token"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    let res = client
        .get(format!("{}/auth/user", srv.base_url))
        .bearer_auth("garbage-token")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn auth_user_reflects_the_token_claims() {
    let jwt_secret = "test-secret";
    let feed = StubFeed::spawn().await;
    let srv = TestServer::spawn(jwt_secret, &feed.base_url).await;

    let user_id = UserId::new();
    let token = mint_jwt(jwt_secret, user_id);

    let client = reqwest::Client::new();
    let res = client
        .get(format!("{}/auth/user", srv.base_url))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body: Value = res.json().await.unwrap();
    assert_eq!(body["id"].as_str().unwrap(), user_id.to_string());
    assert_eq!(body["email"], "admin@example.com");
}

#[tokio::test]
async fn create_product_rejects_invalid_fields_by_name() {
    let jwt_secret = "test-secret";
    let feed = StubFeed::spawn().await;
    let srv = TestServer::spawn(jwt_secret, &feed.base_url).await;

    let token = mint_jwt(jwt_secret, UserId::new());

    let client = reqwest::Client::new();
    let res = client
        .post(format!("{}/admin/products", srv.base_url))
        .bearer_auth(&token)
        .json(&json!({
            "title": "Mug",
            "price": 24.0,
            "description": "short",
            "category": "home",
            "image": "not a url"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "validation_error");
    let fields: Vec<&str> = body["fields"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["field"].as_str().unwrap())
        .collect();
    assert_eq!(fields, vec!["description", "image"]);
}

#[tokio::test]
async fn admin_listings_are_scoped_to_their_owner() {
    let jwt_secret = "test-secret";
    let feed = StubFeed::spawn().await;
    let srv = TestServer::spawn(jwt_secret, &feed.base_url).await;

    let alice = mint_jwt(jwt_secret, UserId::new());
    let bob = mint_jwt(jwt_secret, UserId::new());

    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/admin/products", srv.base_url))
        .bearer_auth(&alice)
        .json(&valid_listing("Alice's Mug"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);

    let res = client
        .post(format!("{}/admin/products", srv.base_url))
        .bearer_auth(&bob)
        .json(&valid_listing("Bob's Bowl"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);

    let res = client
        .get(format!("{}/admin/products", srv.base_url))
        .bearer_auth(&alice)
        .send()
        .await
        .unwrap();
    let body: Value = res.json().await.unwrap();
    let items = body["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["title"], "Alice's Mug");
}

#[tokio::test]
async fn feed_failure_surfaces_as_upstream_error() {
    // Reserve a port, then drop the listener so connections get refused.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let dead_url = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let srv = TestServer::spawn("test-secret", &dead_url).await;

    let res = reqwest::get(format!("{}/products", srv.base_url)).await.unwrap();
    assert_eq!(res.status(), StatusCode::BAD_GATEWAY);

    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "upstream_error");
}

#[tokio::test]
async fn merged_listing_feeds_the_session_cart() {
    let feed = StubFeed::spawn().await;
    let srv = TestServer::spawn("test-secret", &feed.base_url).await;

    let res = reqwest::get(format!("{}/products", srv.base_url)).await.unwrap();
    let body: Value = res.json().await.unwrap();
    let products: Vec<Product> = serde_json::from_value(body["items"].clone()).unwrap();

    let mut cart = Cart::new();
    cart.add(products[0].clone(), 2);
    cart.add(products[1].clone(), 1);
    cart.add(products[0].clone(), 1);

    // 3 x 10.0 + 1 x 60.0 from the stub fixture prices.
    assert_eq!(cart.items().len(), 2);
    assert_eq!(cart.item_count(), 4);
    assert_eq!(cart.total(), 90.0);
    assert_eq!(cart.summary().shipping, 0.0);
}
