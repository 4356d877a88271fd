use actix_web::{web, HttpResponse};

use crate::models::{ApiResponse, LoginRequest, RegisterRequest, UserInfo};
use crate::services::cocktail_service::present_text;
use crate::state::AppState;
use crate::utils::AppError;

#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = "Auth",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Registration successful", body = UserInfo),
        (status = 400, description = "Missing field or user already exists")
    )
)]
pub async fn register(
    state: web::Data<AppState>,
    body: Option<web::Json<RegisterRequest>>,
) -> Result<HttpResponse, AppError> {
    let request = body.map(web::Json::into_inner).unwrap_or_default();
    let email_str = present_text(request.email.clone()).unwrap_or_else(|| "N/A".to_string());
    log::info!("📝 POST /auth/register - email: {}", email_str);

    match state.auth.register(request).await {
        Ok(user) => {
            log::info!("✅ Registration successful: {}", email_str);
            Ok(HttpResponse::Created().json(
                ApiResponse::ok(user).with_message("User registered successfully (demo mode)"),
            ))
        }
        Err(e) => {
            log::warn!("❌ Registration failed: {} - {}", email_str, e);
            Err(e)
        }
    }
}

#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "Auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful (mock, no password check)", body = UserInfo),
        (status = 400, description = "Missing email or password")
    )
)]
pub async fn login(
    state: web::Data<AppState>,
    body: Option<web::Json<LoginRequest>>,
) -> Result<HttpResponse, AppError> {
    let request = body.map(web::Json::into_inner).unwrap_or_default();
    let email_str = present_text(request.email.clone()).unwrap_or_else(|| "N/A".to_string());
    log::info!("🔐 POST /auth/login - email: {}", email_str);

    let user = state.auth.login(request).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(user).with_message("Login successful (demo mode)")))
}

#[utoipa::path(
    get,
    path = "/api/auth/me",
    tag = "Auth",
    responses(
        (status = 200, description = "Demo user", body = UserInfo)
    )
)]
pub async fn get_me(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    log::info!("👤 GET /auth/me");

    let user = state.auth.current_user().await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(user)))
}
