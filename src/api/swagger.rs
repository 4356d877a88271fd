use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Cocktail Service API",
        version = "1.0.0",
        description = "Cocktail lookup (TheCocktailDB proxy), demo registration/login and saved cocktails.\n\n**Authentication:** mock only; tokens are placeholder strings."
    ),
    paths(
        crate::api::health::health_check,
        crate::api::catalog::route_map,
        crate::api::cocktails::search_cocktails,
        crate::api::cocktails::random_cocktail,
        crate::api::cocktails::get_saved,
        crate::api::cocktails::save_cocktail,
        crate::api::auth::register,
        crate::api::auth::login,
        crate::api::auth::get_me,
        crate::api::products::list_products,
    ),
    components(
        schemas(
            crate::api::health::HealthResponse,
            crate::models::SavedCocktail,
            crate::models::SaveCocktailRequest,
            crate::models::UserInfo,
            crate::models::RegisterRequest,
            crate::models::LoginRequest,
        )
    ),
    tags(
        (name = "Health", description = "Health check and route map."),
        (name = "Cocktails", description = "TheCocktailDB search/random and saved cocktails."),
        (name = "Auth", description = "Demo registration and mock login."),
        (name = "Products", description = "Placeholder endpoint."),
    )
)]
pub struct ApiDoc;
