use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct ErrorResponse { pub error: String }

#[derive(ToSchema)]
pub struct CategoryDoc { pub id: i32, pub name: String }

#[derive(ToSchema)]
pub struct CategoryDtoDoc { pub name: String }

#[derive(ToSchema)]
pub struct CustomerDoc { pub id: i32, pub name: String }

#[derive(ToSchema)]
pub struct CustomerDtoDoc { pub name: String }

#[derive(ToSchema)]
pub struct ProductDoc {
    pub id: i32,
    pub name: String,
    pub price: f64,
    pub weight: f64,
    pub description: String,
    pub category_id: i32,
}

/// `price`, `weight` and `category_id` must be strictly positive.
#[derive(ToSchema)]
pub struct ProductDtoDoc {
    pub name: String,
    pub price: f64,
    pub weight: f64,
    pub description: Option<String>,
    pub category_id: i32,
}

#[derive(ToSchema)]
pub struct OrderDoc { pub id: i32, pub customer_id: i32, pub product_id: i32, pub quantity: i32 }

/// All three fields must be strictly positive.
#[derive(ToSchema)]
pub struct OrderDtoDoc { pub customer_id: i32, pub product_id: i32, pub quantity: i32 }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::categories::list,
        crate::routes::categories::get,
        crate::routes::categories::create,
        crate::routes::categories::update,
        crate::routes::categories::delete,
        crate::routes::customers::list,
        crate::routes::customers::get,
        crate::routes::customers::create,
        crate::routes::customers::update,
        crate::routes::customers::delete,
        crate::routes::customers::most_orders_name,
        crate::routes::products::list,
        crate::routes::products::get,
        crate::routes::products::create,
        crate::routes::products::update,
        crate::routes::products::delete,
        crate::routes::orders::list,
        crate::routes::orders::get,
        crate::routes::orders::create,
        crate::routes::orders::update,
        crate::routes::orders::delete,
    ),
    components(
        schemas(
            HealthResponse,
            ErrorResponse,
            CategoryDoc,
            CategoryDtoDoc,
            CustomerDoc,
            CustomerDtoDoc,
            ProductDoc,
            ProductDtoDoc,
            OrderDoc,
            OrderDtoDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "category"),
        (name = "customer"),
        (name = "product"),
        (name = "order")
    )
)]
pub struct ApiDoc;
