use actix_web::HttpResponse;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

static REQUEST_COUNT: AtomicU64 = AtomicU64::new(0);
static ERROR_COUNT: AtomicU64 = AtomicU64::new(0);

pub fn increment_request_count() {
    REQUEST_COUNT.fetch_add(1, Ordering::Relaxed);
}

pub fn increment_error_count() {
    ERROR_COUNT.fetch_add(1, Ordering::Relaxed);
}

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct MetricsResponse {
    pub http_requests_total: u64,
    pub http_errors_total: u64,
}

pub fn snapshot() -> MetricsResponse {
    MetricsResponse {
        http_requests_total: REQUEST_COUNT.load(Ordering::Relaxed),
        http_errors_total: ERROR_COUNT.load(Ordering::Relaxed),
    }
}

fn render(metrics: &MetricsResponse) -> String {
    format!(
        "# HELP http_requests_total Total number of HTTP requests\n\
         # TYPE http_requests_total counter\n\
         http_requests_total {}\n\
         \n\
         # HELP http_errors_total Total number of HTTP errors\n\
         # TYPE http_errors_total counter\n\
         http_errors_total {}\n",
        metrics.http_requests_total, metrics.http_errors_total
    )
}

#[utoipa::path(
    get,
    path = "/metrics",
    tag = "Health",
    responses(
        (status = 200, description = "Prometheus text exposition of request counters")
    )
)]
pub async fn get_metrics() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain; version=0.0.4")
        .body(render(&snapshot()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_prometheus_text() {
        let text = render(&MetricsResponse {
            http_requests_total: 7,
            http_errors_total: 2,
        });
        assert!(text.contains("http_requests_total 7\n"));
        assert!(text.contains("http_errors_total 2\n"));
        assert!(text.contains("# TYPE http_errors_total counter"));
    }

    #[test]
    fn test_counters_only_grow() {
        let before = snapshot();
        increment_request_count();
        increment_error_count();
        let after = snapshot();
        assert!(after.http_requests_total > before.http_requests_total);
        assert!(after.http_errors_total > before.http_errors_total);
    }
}
