mod api;
mod config;
mod database;
mod middleware;
mod models;
mod services;
mod utils;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use std::sync::Arc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::{AppConfig, StoreBackend};
use crate::database::{InMemoryUserStore, MongoDB, MongoUserStore, UserStore};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = AppConfig::from_env().map_err(std::io::Error::other)?;

    log::info!("🚀 Starting MeanMap Service...");

    let store: Arc<dyn UserStore> = match config.store_backend {
        StoreBackend::MongoDB => {
            log::info!("📊 Database: {} ({})", config.database_url, config.database_name);

            let db = MongoDB::new(&config.database_url, &config.database_name)
                .await
                .map_err(|e| {
                    log::error!("❌ Failed to connect to MongoDB: {}", e);
                    std::io::Error::other(e)
                })?;

            log::info!("✅ MongoDB connected successfully");
            Arc::new(MongoUserStore::new(db))
        }
        StoreBackend::Memory => {
            log::warn!("⚠️  Using in-memory user store, data is lost on restart");
            Arc::new(InMemoryUserStore::new())
        }
    };

    let store_data: web::Data<dyn UserStore> = web::Data::from(store);

    let host = config.host.clone();
    let port = config.port;
    let allowed_origins = config.allowed_origins.clone();

    log::info!("🌐 Server starting on {}:{}", host, port);
    log::info!("📚 Swagger UI available at: http://{}:{}/swagger-ui/", host, port);
    log::info!("📄 OpenAPI spec at: http://{}:{}/api-docs/openapi.json", host, port);

    // Start HTTP server
    HttpServer::new(move || {
        let cors = allowed_origins
            .iter()
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
            .allowed_methods(vec!["GET", "POST", "OPTIONS"])
            .allowed_headers(vec![
                actix_web::http::header::CONTENT_TYPE,
                actix_web::http::header::ACCEPT,
            ])
            .max_age(3600);

        let openapi = api::swagger::ApiDoc::openapi();

        App::new()
            .app_data(store_data.clone())
            .wrap(cors)
            .wrap(middleware::RequestMetrics)
            .wrap(Logger::default())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi),
            )
            .configure(api::configure)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
