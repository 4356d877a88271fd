use actix_web::{web, HttpRequest, HttpResponse};

use crate::models::{ApiResponse, SaveCocktailRequest, SavedCocktail, SearchQuery};
use crate::services::cocktail_service;
use crate::state::AppState;
use crate::utils::AppError;

/// GET /api/cocktails/search?name=margarita
/// Busca cócteles por nombre en TheCocktailDB
#[utoipa::path(
    get,
    path = "/api/cocktails/search",
    tag = "Cocktails",
    params(SearchQuery),
    responses(
        (status = 200, description = "Matching drinks: {success, data, count}"),
        (status = 400, description = "Missing name parameter"),
        (status = 500, description = "Upstream lookup failed")
    )
)]
pub async fn search_cocktails(
    state: web::Data<AppState>,
    req: HttpRequest,
) -> Result<HttpResponse, AppError> {
    let name = cocktail_service::name_from_query(req.query_string());
    log::info!("🔍 GET /cocktails/search?name={}", name.as_deref().unwrap_or(""));

    match cocktail_service::search(state.cocktails.as_ref(), name.as_deref()).await {
        Ok(drinks) => {
            let count = drinks.len();
            Ok(HttpResponse::Ok().json(ApiResponse::ok(drinks).with_count(count)))
        }
        Err(e) => {
            log::error!("❌ Error buscando cócteles: {}", e);
            Err(e)
        }
    }
}

/// GET /api/cocktails/random
/// Obtiene un cóctel aleatorio
#[utoipa::path(
    get,
    path = "/api/cocktails/random",
    tag = "Cocktails",
    responses(
        (status = 200, description = "A random drink, or null"),
        (status = 500, description = "Upstream lookup failed")
    )
)]
pub async fn random_cocktail(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    log::info!("🎲 GET /cocktails/random");

    let drink = cocktail_service::random(state.cocktails.as_ref())
        .await
        .map_err(|e| {
            log::error!("❌ Error obteniendo cóctel aleatorio: {}", e);
            e
        })?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(drink)))
}

/// GET /api/cocktails/saved
#[utoipa::path(
    get,
    path = "/api/cocktails/saved",
    tag = "Cocktails",
    responses(
        (status = 200, description = "Saved cocktails in insertion order", body = [SavedCocktail])
    )
)]
pub async fn get_saved(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    log::info!("📚 GET /cocktails/saved");

    let saved = state.store.list_saved().await?;
    let count = saved.len();

    Ok(HttpResponse::Ok().json(ApiResponse::ok(saved).with_count(count)))
}

/// POST /api/cocktails/save
/// Guarda un cóctel (datos de relleno, sin consultar la API)
#[utoipa::path(
    post,
    path = "/api/cocktails/save",
    tag = "Cocktails",
    request_body = SaveCocktailRequest,
    responses(
        (status = 201, description = "Cocktail saved", body = SavedCocktail),
        (status = 400, description = "Missing cocktailId")
    )
)]
pub async fn save_cocktail(
    state: web::Data<AppState>,
    body: Option<web::Json<SaveCocktailRequest>>,
) -> Result<HttpResponse, AppError> {
    let request = body.map(web::Json::into_inner).unwrap_or_default();
    log::info!("💾 POST /cocktails/save - cocktailId: {:?}", request.cocktail_id);

    let cocktail = cocktail_service::save(state.store.as_ref(), &state.ids, request.cocktail_id).await?;

    log::info!("✅ Saved cocktail {}", cocktail.id);
    Ok(HttpResponse::Created().json(
        ApiResponse::ok(cocktail).with_message("Cóctel guardado exitosamente (demo mode)"),
    ))
}
