use actix_web::{web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use crate::database::UserStore;

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub timestamp: i64,
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
        (status = 503, description = "Storage is unreachable", body = HealthResponse)
    )
)]
pub async fn health_check(store: web::Data<dyn UserStore>) -> impl Responder {
    let (mut response, status) = match store.ping().await {
        Ok(()) => (HttpResponse::Ok(), "healthy"),
        Err(e) => {
            log::warn!("⚠️  Health check failed: {}", e);
            (HttpResponse::ServiceUnavailable(), "unhealthy")
        }
    };

    response.json(HealthResponse {
        status: status.to_string(),
        service: "meanmap-service".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now().timestamp(),
    })
}
