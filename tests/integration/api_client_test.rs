// Integration test for the REST client against a local canned server
//
// Checks the request lines, query strings and JSON bodies each port sends,
// and how `{"detail": ...}` error responses map onto `AppError`.

#[path = "../helpers/mod.rs"]
mod helpers;

use helpers::{CannedServer, TestDataFactory};
use reqwest::StatusCode;
use rust_decimal_macros::dec;
use taptaze::admin::{AdminApi, AdminCredentials, ProductInput};
use taptaze::cart::Cart;
use taptaze::catalog::{CatalogApi, ProductQuery, UnitType};
use taptaze::core::{AppError, Result};
use taptaze::orders::{CreateOrderRequest, OrderApi, OrderStatus};

const PRODUCTS: &str = r#"[
    {"id":"elma","name":"Elma","category_id":"meyve","price":18.5,"unit_type":"KG","stock":60,"image":null}
]"#;

const ORDER: &str = r#"{
    "id":"ord-1","customer_name":"Ayşe Yılmaz","customer_phone":"05551112233",
    "delivery_address":"Moda Cad. No:5 Kadıköy","customer_note":null,
    "items":[{"product_id":"domates","product_name":"Ürün domates","product_image":null,"quantity":1.5,"price":24.9,"unit_type":"KG"}],
    "total_amount":37.35,"status":"Beklemede","created_at":"2024-05-01T09:30:00.123000"
}"#;

#[tokio::test]
async fn test_list_products_encodes_filters_as_query() -> Result<()> {
    let server = CannedServer::respond(200, PRODUCTS).await;

    let query = ProductQuery::in_category("meyve").search(" elma ");
    let products = server.client.list_products(&query).await?;
    assert_eq!(products.len(), 1);
    assert_eq!(products[0].price, dec!(18.5));
    assert_eq!(products[0].unit_type, UnitType::Kilogram);

    let request = server.request().await;
    assert_eq!(
        request.request_line,
        "GET /api/products?category_id=meyve&search=elma HTTP/1.1"
    );
    assert_eq!(request.header("accept"), Some("application/json"));
    assert!(request.header("x-request-id").is_some());
    Ok(())
}

#[tokio::test]
async fn test_unfiltered_listing_sends_no_query() -> Result<()> {
    let server = CannedServer::respond(200, "[]").await;

    assert!(server.client.list_products(&ProductQuery::all()).await?.is_empty());
    assert_eq!(server.request().await.request_line, "GET /api/products HTTP/1.1");
    Ok(())
}

#[tokio::test]
async fn test_create_order_posts_numbers() -> Result<()> {
    let server = CannedServer::respond(200, ORDER).await;

    let mut cart = Cart::new();
    cart.add(&TestDataFactory::weight_product("domates", dec!(24.90), dec!(30)), dec!(1.5));
    let request =
        CreateOrderRequest::from_cart(cart.lines(), cart.total(), &TestDataFactory::customer())?;

    let order = server.client.create_order(&request).await?;
    assert_eq!(order.status, OrderStatus::Pending);
    assert_eq!(order.total_amount, dec!(37.35));

    let sent = server.request().await;
    assert_eq!(sent.request_line, "POST /api/orders HTTP/1.1");
    assert_eq!(sent.header("content-type"), Some("application/json"));

    let body = sent.json();
    assert_eq!(body["total_amount"], serde_json::json!(37.35));
    assert_eq!(body["items"][0]["quantity"], serde_json::json!(1.5));
    assert_eq!(body["items"][0]["unit_type"], "KG");
    assert_eq!(body["customer_phone"], "05551112233");
    assert!(body.get("customer_note").is_none());
    Ok(())
}

#[tokio::test]
async fn test_not_found_detail_maps_to_not_found() {
    let server = CannedServer::respond(404, r#"{"detail":"Ürün bulunamadı"}"#).await;

    let err = server.client.get_product("yok").await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(ref msg) if msg == "Ürün bulunamadı"));
    assert_eq!(server.request().await.request_line, "GET /api/products/yok HTTP/1.1");
}

#[tokio::test]
async fn test_bad_request_keeps_status_and_detail() {
    let server = CannedServer::respond(400, r#"{"detail":"Stok yetersiz: Domates"}"#).await;

    let mut cart = Cart::new();
    cart.add(&TestDataFactory::piece_product("domates", dec!(3), dec!(1)), dec!(2));
    let request =
        CreateOrderRequest::from_cart(cart.lines(), cart.total(), &TestDataFactory::customer())
            .unwrap();

    let err = server.client.create_order(&request).await.unwrap_err();
    match &err {
        AppError::Api { status, message } => {
            assert_eq!(*status, StatusCode::BAD_REQUEST);
            assert_eq!(message, "Stok yetersiz: Domates");
        }
        other => panic!("unexpected error: {:?}", other),
    }
    assert!(!err.is_retryable());
}

#[tokio::test]
async fn test_server_error_is_retryable() {
    let server = CannedServer::respond(503, "upstream down").await;

    let err = server.client.list_categories().await.unwrap_err();
    assert!(matches!(err, AppError::Api { ref message, .. } if message == "upstream down"));
    assert!(err.is_retryable());
}

#[tokio::test]
async fn test_admin_login_rejected_is_unauthorized() {
    let server =
        CannedServer::respond(401, r#"{"detail":"Kullanıcı adı veya şifre hatalı"}"#).await;

    let err = server
        .client
        .login(&AdminCredentials::new("admin", "yanlis"))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Unauthorized(_)));

    let sent = server.request().await;
    assert_eq!(sent.request_line, "POST /api/admin/login HTTP/1.1");
    assert_eq!(sent.json(), serde_json::json!({"username": "admin", "password": "yanlis"}));
}

#[tokio::test]
async fn test_admin_order_status_patch() -> Result<()> {
    let server = CannedServer::respond(200, r#"{"success":true,"message":"Güncellendi"}"#).await;

    server
        .client
        .update_order_status("ord-1", OrderStatus::Delivered)
        .await?;

    let sent = server.request().await;
    assert_eq!(sent.request_line, "PATCH /api/admin/orders/ord-1 HTTP/1.1");
    assert_eq!(sent.json(), serde_json::json!({"status": "Teslim Edildi"}));
    Ok(())
}

#[tokio::test]
async fn test_admin_product_delete_and_update_paths() -> Result<()> {
    let server = CannedServer::respond(200, r#"{"success":true,"message":"Silindi"}"#).await;
    server.client.delete_product("elma").await?;
    assert_eq!(
        server.request().await.request_line,
        "DELETE /api/admin/products/elma HTTP/1.1"
    );

    let product = TestDataFactory::weight_product("elma", dec!(18.5), dec!(60));
    let response = serde_json::to_string(&product)?;
    let server = CannedServer::respond(200, &response).await;
    let updated = server
        .client
        .update_product("elma", &ProductInput::from(&product))
        .await?;
    assert_eq!(updated.id, "elma");

    let sent = server.request().await;
    assert_eq!(sent.request_line, "PUT /api/admin/products/elma HTTP/1.1");
    assert_eq!(sent.json()["price"], serde_json::json!(18.5));
    assert_eq!(sent.json()["stock"], serde_json::json!(60.0));
    Ok(())
}

#[tokio::test]
async fn test_invalid_product_input_is_not_sent() {
    let server = CannedServer::respond(200, "{}").await;
    let mut input = ProductInput::from(&TestDataFactory::piece_product("p1", dec!(3), dec!(5)));
    input.name = "  ".to_string();

    let err = server.client.create_product(&input).await.unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
}
