use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    Error,
};
use futures::future::LocalBoxFuture;
use std::future::{ready, Ready};

use crate::api::metrics::{increment_error_count, increment_request_count};

/// Alimenta os contadores expostos em /metrics
pub struct RequestMetrics;

impl<S, B> Transform<S, ServiceRequest> for RequestMetrics
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = RequestMetricsMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequestMetricsMiddleware { service }))
    }
}

pub struct RequestMetricsMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for RequestMetricsMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        increment_request_count();
        let fut = self.service.call(req);

        Box::pin(async move {
            match fut.await {
                Ok(res) => {
                    if res.status().is_server_error() {
                        increment_error_count();
                    }
                    Ok(res)
                }
                Err(e) => {
                    increment_error_count();
                    Err(e)
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::metrics::snapshot;
    use actix_web::{test, web, App, HttpResponse};

    #[actix_rt::test]
    async fn test_counts_requests_and_server_errors() {
        let app = test::init_service(
            App::new()
                .wrap(RequestMetrics)
                .route("/ok", web::get().to(|| async { HttpResponse::Ok().finish() }))
                .route("/boom", web::get().to(|| async { HttpResponse::InternalServerError().finish() })),
        )
        .await;

        let before = snapshot();
        test::call_service(&app, test::TestRequest::get().uri("/ok").to_request()).await;
        test::call_service(&app, test::TestRequest::get().uri("/boom").to_request()).await;
        let after = snapshot();

        assert!(after.http_requests_total >= before.http_requests_total + 2);
        assert!(after.http_errors_total >= before.http_errors_total + 1);
    }
}
