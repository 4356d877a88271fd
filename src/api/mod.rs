use actix_web::{web, Resource, Route};

pub mod auth;
pub mod catalog;
pub mod cocktails;
pub mod health;
pub mod products;
pub mod swagger;

/// Every route answers the 404 envelope for methods it does not serve
fn resource(path: &str, route: Route) -> Resource {
    web::resource(path)
        .route(route)
        .default_service(web::to(catalog::not_found))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().limit(64 * 1024))
        .service(resource("/api/health", web::get().to(health::health_check)))
        .service(resource("/api/test", web::get().to(catalog::route_map)))
        .service(resource("/api/cocktails/search", web::get().to(cocktails::search_cocktails)))
        .service(resource("/api/cocktails/random", web::get().to(cocktails::random_cocktail)))
        .service(resource("/api/cocktails/saved", web::get().to(cocktails::get_saved)))
        .service(resource("/api/cocktails/save", web::post().to(cocktails::save_cocktail)))
        .service(resource("/api/auth/register", web::post().to(auth::register)))
        .service(resource("/api/auth/login", web::post().to(auth::login)))
        .service(resource("/api/auth/me", web::get().to(auth::get_me)))
        .service(resource("/api/products", web::get().to(products::list_products)))
        .default_service(web::to(catalog::not_found));
}
