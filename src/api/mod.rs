pub mod health;
pub mod metrics;
pub mod query;
pub mod swagger;
pub mod users;

use actix_web::{error::InternalError, web, HttpResponse};

/// Corpo JSON inválido -> 400 com o mesmo formato de erro das outras rotas
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        log::warn!("⚠️  Rejected JSON body: {}", err);
        let response = HttpResponse::BadRequest().json(serde_json::json!({
            "success": false,
            "error": format!("Invalid request body: {}", err)
        }));
        InternalError::from_response(err, response).into()
    })
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        // Health check
        .route("/health", web::get().to(health::health_check))
        // Metrics
        .route("/metrics", web::get().to(metrics::get_metrics))
        .service(
            web::resource("/users")
                .route(web::get().to(users::list_users))
                .route(web::post().to(users::create_user)),
        )
        .route("/query", web::post().to(query::query_users));
}
