use actix_web::{HttpRequest, HttpResponse};
use serde_json::json;

use crate::utils::AppError;

/// Routes listed in every 404 response
pub const AVAILABLE_ROUTES: &[&str] = &[
    "GET /api/health",
    "GET /api/test",
    "GET /api/cocktails/search?name=...",
    "GET /api/cocktails/random",
    "GET /api/cocktails/saved",
    "POST /api/cocktails/save",
    "POST /api/auth/register",
    "POST /api/auth/login",
    "GET /api/auth/me",
    "GET /api/products",
];

#[utoipa::path(
    get,
    path = "/api/test",
    tag = "Health",
    responses(
        (status = 200, description = "Static route map")
    )
)]
pub async fn route_map() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "success": true,
        "message": "¡Backend funcionando correctamente!",
        "routes": {
            "health": "/api/health",
            "cocktails": {
                "search": "/api/cocktails/search?name=margarita",
                "random": "/api/cocktails/random",
                "saved": "/api/cocktails/saved"
            },
            "auth": {
                "register": "/api/auth/register",
                "login": "/api/auth/login",
                "me": "/api/auth/me"
            }
        }
    }))
}

/// Fallback for unknown paths and for known paths hit with the wrong method
pub async fn not_found(req: HttpRequest) -> Result<HttpResponse, AppError> {
    let original_url = req
        .uri()
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| req.path().to_string());

    log::warn!("⚠️  {} {} - route not found", req.method(), original_url);
    Err(AppError::NotFound(original_url))
}
