//! HTTP transport tests against a local mock server.

use serde_json::json;
use storefront_core::products::load_catalog;
use storefront_core::{
    Catalog, ClientError, Endpoint, HttpTransport, Locale, StorefrontApi, Transport,
};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn api_for(server: &MockServer) -> StorefrontApi<HttpTransport> {
    StorefrontApi::new(HttpTransport::new(server.uri()))
}

#[tokio::test]
async fn test_check_posts_json_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/check"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({ "email_or_phone": "user@example.com" })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "exists": true, "message": "Welcome back" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let response = api_for(&server).check("user@example.com").await.unwrap();

    assert!(response.exists);
    assert_eq!(response.message, "Welcome back");
}

#[tokio::test]
async fn test_rejection_with_error_status_is_a_reply() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(json!({ "success": false, "message": "Incorrect password" })),
        )
        .mount(&server)
        .await;

    let response = api_for(&server)
        .login("user@example.com", "wrong")
        .await
        .unwrap();

    assert!(!response.success);
    assert_eq!(response.message, "Incorrect password");
}

#[tokio::test]
async fn test_non_json_error_is_status_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/verify"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&server)
        .await;

    let result = api_for(&server)
        .verify("user@example.com", "123456")
        .await;

    match result {
        Err(ClientError::Status { status, body }) => {
            assert_eq!(status, 502);
            assert_eq!(body, "Bad Gateway");
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_non_json_success_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/products"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html></html>"))
        .mount(&server)
        .await;

    let result = HttpTransport::new(server.uri())
        .fetch_json(Endpoint::Products, None)
        .await;

    assert!(matches!(result, Err(ClientError::Decode(_))));
}

#[tokio::test]
async fn test_unreachable_server_is_network_error() {
    // Nothing listens on port 9 (discard) in the test environment
    let api = StorefrontApi::new(HttpTransport::new("http://127.0.0.1:9"));

    let result = api.check("user@example.com").await;

    assert!(matches!(result, Err(ClientError::Network(_))));
}

#[tokio::test]
async fn test_products_render_sold_out_card() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [
                {
                    "id": "a1",
                    "name": "Wool Throw",
                    "description": "Merino",
                    "price": 2400000,
                    "stock_quantity": 0
                }
            ]
        })))
        .mount(&server)
        .await;

    let catalog = load_catalog(&api_for(&server), Locale::En).await;

    let Catalog::Cards(cards) = catalog else {
        panic!("expected cards");
    };
    assert_eq!(cards.len(), 1);
    assert!(cards[0].button_disabled);
    assert_eq!(cards[0].button_label, "Unavailable");
    assert_eq!(cards[0].price_label, "2,400,000");
}

#[tokio::test]
async fn test_products_failure_renders_empty_state() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/products"))
        .respond_with(ResponseTemplate::new(500).set_body_string("oops"))
        .mount(&server)
        .await;

    let catalog = load_catalog(&api_for(&server), Locale::En).await;

    assert_eq!(catalog, Catalog::Empty);
}

#[tokio::test]
async fn test_products_without_items_render_empty_state() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let catalog = load_catalog(&api_for(&server), Locale::En).await;

    assert_eq!(catalog, Catalog::Empty);
}

#[tokio::test]
async fn test_products_skip_malformed_items() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [
                { "id": "1", "name": "Good", "price": 10, "stock_quantity": 3 },
                { "id": "2", "name": "Odd", "price": 10, "stock_quantity": null },
                { "id": "3", "name": "Broken" }
            ]
        })))
        .mount(&server)
        .await;

    let catalog = load_catalog(&api_for(&server), Locale::En).await;

    let Catalog::Cards(cards) = catalog else {
        panic!("expected cards");
    };
    let names: Vec<&str> = cards.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Good", "Odd"]);
    assert!(!cards[0].button_disabled);
    assert!(cards[1].button_disabled);
}
