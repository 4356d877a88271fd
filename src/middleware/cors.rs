use actix_cors::Cors;
use actix_web::http::{header, Method};

use crate::config::CorsPolicy;

pub fn build_cors(policy: &CorsPolicy) -> Cors {
    match policy {
        CorsPolicy::Restricted { origin } => Cors::default()
            .allowed_origin(origin)
            .allowed_methods(vec![Method::GET, Method::POST, Method::PUT, Method::DELETE, Method::OPTIONS])
            .allowed_headers(vec![
                header::CONTENT_TYPE,
                header::AUTHORIZATION,
                header::HeaderName::from_static("x-requested-with"),
            ])
            .supports_credentials(),
        CorsPolicy::Permissive => Cors::permissive(),
    }
}
