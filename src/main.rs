use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use std::io;
use std::sync::Arc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use cocktail_service::config::{Config, CorsPolicy, StorageBackend};
use cocktail_service::database::{redacted_uri, MemoryStore, MongoStore, Store};
use cocktail_service::services::CocktailDbClient;
use cocktail_service::state::AppState;
use cocktail_service::{api, middleware};

fn invalid_config(msg: String) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidInput, msg)
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::from_env().map_err(invalid_config)?;

    log::info!("🚀 Starting Cocktail Service...");

    let store: Arc<dyn Store> = match &config.storage {
        StorageBackend::Memory => Arc::new(MemoryStore::new()),
        StorageBackend::MongoDb { uri } => {
            log::info!("📊 Database: {}", redacted_uri(uri));
            let db = MongoStore::new(uri)
                .await
                .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("Failed to connect to MongoDB: {}", e)))?;
            log::info!("✅ MongoDB connected successfully");
            Arc::new(db)
        }
    };

    let cocktails = CocktailDbClient::new(&config.cocktail_api_base, config.upstream_timeout)
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;

    let state = web::Data::new(AppState::new(store.clone(), Arc::new(cocktails)));
    let openapi = api::swagger::ApiDoc::openapi();
    let cors_policy = config.cors.clone();

    let port = config.port;
    log::info!("🚀 Servidor corriendo en puerto {}", port);
    log::info!("📡 Health check: http://localhost:{}/api/health", port);
    log::info!("🔧 Test completo: http://localhost:{}/api/test", port);
    log::info!("🍹 Buscar margaritas: http://localhost:{}/api/cocktails/search?name=margarita", port);
    log::info!("🎲 Cóctel aleatorio: http://localhost:{}/api/cocktails/random", port);
    match &cors_policy {
        CorsPolicy::Restricted { origin } => log::info!("💡 Frontend: {}", origin),
        CorsPolicy::Permissive => log::info!("💡 Frontend: any origin (CORS permissive)"),
    }
    log::info!("🔧 Modo: {}", store.mode());
    log::info!("📚 Swagger UI available at: http://localhost:{}/swagger-ui/", port);

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(middleware::build_cors(&cors_policy))
            .wrap(Logger::default())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi.clone())
            )
            .configure(api::configure)
    })
    .bind((config.host.as_str(), port))?
    .run()
    .await
}
