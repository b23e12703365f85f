use axum::body::{to_bytes, Body};
use axum::http::{header, HeaderMap, Method, Request, StatusCode};
use axum::Router;
use migration::{Migrator, MigratorTrait};
use serde_json::{json, Value};
use tower::ServiceExt;
use tower_http::cors::CorsLayer;

use server::routes;
use server::ServerState;

fn app(state: ServerState) -> Router {
    routes::build_router(state, CorsLayer::very_permissive())
}

struct Reply {
    status: StatusCode,
    headers: HeaderMap,
    body: Value,
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> Reply {
    let mut req = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(v) => {
            req = req.header(header::CONTENT_TYPE, "application/json");
            Body::from(v.to_string())
        }
        None => Body::empty(),
    };
    let res = app.clone().oneshot(req.body(body).unwrap()).await.unwrap();
    let status = res.status();
    let headers = res.headers().clone();
    let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes).unwrap() };
    Reply { status, headers, body }
}

#[tokio::test]
async fn health_is_ok() {
    let app = app(ServerState::in_memory());
    let r = send(&app, Method::GET, "/health", None).await;
    assert_eq!(r.status, StatusCode::OK);
    assert_eq!(r.body, json!({"status": "ok"}));
}

#[tokio::test]
async fn product_lifecycle() {
    let app = app(ServerState::in_memory());

    let r = send(
        &app,
        Method::POST,
        "/api/Product",
        Some(json!({"name": "lamp", "price": 25.0, "weight": 1.2, "description": "desk lamp", "category_id": 3})),
    )
    .await;
    assert_eq!(r.status, StatusCode::CREATED);
    let id = r.body["id"].as_i64().unwrap();
    assert_eq!(r.headers[header::LOCATION], format!("/api/Product/{id}").as_str());

    let r = send(&app, Method::GET, &format!("/api/Product/{id}"), None).await;
    assert_eq!(r.status, StatusCode::OK);
    assert_eq!(r.body["name"], "lamp");
    assert_eq!(r.body["category_id"], 3);

    let r = send(
        &app,
        Method::PUT,
        &format!("/api/Product/{id}"),
        Some(json!({"name": "floor lamp", "price": 80.0, "weight": 6.5, "category_id": 3})),
    )
    .await;
    assert_eq!(r.status, StatusCode::NO_CONTENT);

    let r = send(&app, Method::GET, "/api/Product/GetAllProducts", None).await;
    assert_eq!(r.status, StatusCode::OK);
    let all = r.body.as_array().unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0]["name"], "floor lamp");
    assert_eq!(all[0]["id"], id);

    let r = send(&app, Method::DELETE, &format!("/api/Product/{id}"), None).await;
    assert_eq!(r.status, StatusCode::NO_CONTENT);

    let r = send(&app, Method::GET, &format!("/api/Product/{id}"), None).await;
    assert_eq!(r.status, StatusCode::NOT_FOUND);
    assert!(r.body["error"].as_str().unwrap().contains("product"));
}

#[tokio::test]
async fn validation_failures_are_bad_requests() {
    let app = app(ServerState::in_memory());

    let r = send(
        &app,
        Method::POST,
        "/api/Product",
        Some(json!({"name": "x", "price": -1.0, "weight": 10.0, "category_id": 1})),
    )
    .await;
    assert_eq!(r.status, StatusCode::BAD_REQUEST);
    assert!(r.body["error"].as_str().unwrap().contains("price"));

    let r = send(
        &app,
        Method::POST,
        "/api/Order",
        Some(json!({"customer_id": 1, "product_id": 1, "quantity": 0})),
    )
    .await;
    assert_eq!(r.status, StatusCode::BAD_REQUEST);
    assert!(r.body["error"].as_str().unwrap().contains("quantity"));

    for uri in ["/api/Category/0", "/api/Customer/-4", "/api/Order/0"] {
        let r = send(&app, Method::GET, uri, None).await;
        assert_eq!(r.status, StatusCode::BAD_REQUEST, "{uri}");
    }

    let r = send(&app, Method::GET, "/api/Product/GetAllProducts", None).await;
    assert_eq!(r.body, json!([]));
}

#[tokio::test]
async fn malformed_requests_are_bad_requests() {
    let app = app(ServerState::in_memory());

    let r = send(
        &app,
        Method::POST,
        "/api/Product",
        Some(json!({"name": "x", "weight": 1.0, "category_id": 1})),
    )
    .await;
    assert_eq!(r.status, StatusCode::BAD_REQUEST);
    assert!(r.body["error"].as_str().unwrap().contains("price"));

    let r = send(
        &app,
        Method::PUT,
        "/api/Order/1",
        Some(json!({"customer_id": "one", "product_id": 1, "quantity": 1})),
    )
    .await;
    assert_eq!(r.status, StatusCode::BAD_REQUEST);
    assert!(r.body["error"].is_string());

    for (method, uri) in [(Method::GET, "/api/Product/abc"), (Method::DELETE, "/api/Customer/1.5")] {
        let r = send(&app, method, uri, None).await;
        assert_eq!(r.status, StatusCode::BAD_REQUEST, "{uri}");
        assert!(r.body["error"].is_string(), "{uri}");
    }

    let r = send(&app, Method::GET, "/api/Product/GetAllProducts", None).await;
    assert_eq!(r.body, json!([]));
}

#[tokio::test]
async fn missing_records_are_not_found() {
    let app = app(ServerState::in_memory());
    let r = send(&app, Method::PUT, "/api/Category/42", Some(json!({"name": "books"}))).await;
    assert_eq!(r.status, StatusCode::NOT_FOUND);
    let r = send(&app, Method::DELETE, "/api/Customer/42", None).await;
    assert_eq!(r.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn customer_name_reports_most_orders() {
    let app = app(ServerState::in_memory());

    let r = send(&app, Method::GET, "/api/Customer/Name", None).await;
    assert_eq!(r.status, StatusCode::BAD_REQUEST);

    for (name, n) in [("A", 2), ("B", 5), ("C", 1)] {
        let r = send(&app, Method::POST, "/api/Customer", Some(json!({"name": name}))).await;
        assert_eq!(r.status, StatusCode::CREATED);
        let customer_id = r.body["id"].as_i64().unwrap();
        for _ in 0..n {
            let r = send(
                &app,
                Method::POST,
                "/api/Order",
                Some(json!({"customer_id": customer_id, "product_id": 1, "quantity": 1})),
            )
            .await;
            assert_eq!(r.status, StatusCode::CREATED);
        }
    }

    let r = send(&app, Method::GET, "/api/Customer/Name", None).await;
    assert_eq!(r.status, StatusCode::OK);
    assert_eq!(r.body, json!("B"));

    let r = send(&app, Method::GET, "/api/Order/GetAllOrders", None).await;
    assert_eq!(r.body.as_array().unwrap().len(), 8);
}

#[tokio::test]
async fn sql_backed_flow() -> anyhow::Result<()> {
    let db = models::db::connect_in_memory().await?;
    Migrator::up(&db, None).await?;
    let app = app(ServerState::seaorm(db));

    let r = send(&app, Method::POST, "/api/Category", Some(json!({"name": "stationery"}))).await;
    assert_eq!(r.status, StatusCode::CREATED);
    let category_id = r.body["id"].as_i64().unwrap();

    let r = send(
        &app,
        Method::POST,
        "/api/Product",
        Some(json!({"name": "pen", "price": 1.5, "weight": 0.01, "category_id": category_id})),
    )
    .await;
    assert_eq!(r.status, StatusCode::CREATED);
    assert_eq!(r.body["description"], "");

    // 外键约束：不存在的分类
    let r = send(
        &app,
        Method::POST,
        "/api/Product",
        Some(json!({"name": "ghost", "price": 1.0, "weight": 1.0, "category_id": 999})),
    )
    .await;
    assert_eq!(r.status, StatusCode::BAD_REQUEST);

    let r = send(&app, Method::GET, "/api/Category/GetAllCategories", None).await;
    assert_eq!(r.body, json!([{"id": category_id, "name": "stationery"}]));
    Ok(())
}

#[tokio::test]
async fn openapi_document_lists_controllers() {
    let app = app(ServerState::in_memory());
    let r = send(&app, Method::GET, "/api-docs/openapi.json", None).await;
    assert_eq!(r.status, StatusCode::OK);
    let paths = r.body["paths"].as_object().unwrap();
    for p in ["/health", "/api/Product/{id}", "/api/Customer/Name", "/api/Order/GetAllOrders"] {
        assert!(paths.contains_key(p), "{p}");
    }
}
