use axum::{routing::{get, post}, Json, Router};
use tower_http::{
    cors::CorsLayer,
    trace::{TraceLayer, DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, DefaultOnFailure},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::Health;

use crate::openapi::ApiDoc;
use crate::state::ServerState;

pub mod crud;
pub mod categories;
pub mod customers;
pub mod orders;
pub mod products;

#[utoipa::path(
    get, path = "/health", tag = "health",
    responses((status = 200, description = "Service is up", body = crate::openapi::HealthResponse))
)]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router: the four entity controllers, health and API docs.
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let category_routes = Router::new()
        .route("/api/Category/GetAllCategories", get(categories::list))
        .route("/api/Category", post(categories::create))
        .route(
            "/api/Category/:id",
            get(categories::get).put(categories::update).delete(categories::delete),
        );

    // 静态路径 Name 优先于 :id 匹配
    let customer_routes = Router::new()
        .route("/api/Customer/GetAllCustomers", get(customers::list))
        .route("/api/Customer/Name", get(customers::most_orders_name))
        .route("/api/Customer", post(customers::create))
        .route(
            "/api/Customer/:id",
            get(customers::get).put(customers::update).delete(customers::delete),
        );

    let product_routes = Router::new()
        .route("/api/Product/GetAllProducts", get(products::list))
        .route("/api/Product", post(products::create))
        .route(
            "/api/Product/:id",
            get(products::get).put(products::update).delete(products::delete),
        );

    let order_routes = Router::new()
        .route("/api/Order/GetAllOrders", get(orders::list))
        .route("/api/Order", post(orders::create))
        .route(
            "/api/Order/:id",
            get(orders::get).put(orders::update).delete(orders::delete),
        );

    Router::new()
        .route("/health", get(health))
        .merge(category_routes)
        .merge(customer_routes)
        .merge(product_routes)
        .merge(order_routes)
        .with_state(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                // 每次请求创建 span，包含方法和路径
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                // 响应返回时打点，包含状态码与耗时
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
