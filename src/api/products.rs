use actix_web::HttpResponse;
use serde_json::Value;

use crate::models::ApiResponse;

#[utoipa::path(
    get,
    path = "/api/products",
    tag = "Products",
    responses(
        (status = 200, description = "Placeholder, always an empty list")
    )
)]
pub async fn list_products() -> HttpResponse {
    HttpResponse::Ok().json(
        ApiResponse::ok(Vec::<Value>::new()).with_message("Endpoint de productos - por implementar"),
    )
}
