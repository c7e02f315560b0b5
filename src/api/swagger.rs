use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "MeanMap Service API",
        version = "1.0.0",
        description = "User records with location and demographic data.\n\n**Features:**\n- List and create users\n- Filtered query by distance (miles), gender, age range, favorite language and HTML5-verified location\n- Health monitoring and metrics"
    ),
    paths(
        // Users
        crate::api::users::list_users,
        crate::api::users::create_user,
        crate::api::query::query_users,

        // Health & Metrics
        crate::api::health::health_check,
        crate::api::metrics::get_metrics,
    ),
    components(
        schemas(
            crate::models::GeoPoint,
            crate::models::GeometryType,
            crate::models::NewUser,
            crate::models::UserResponse,
            crate::services::QueryRequest,
            crate::api::health::HealthResponse,
            crate::api::metrics::MetricsResponse,
        )
    ),
    tags(
        (name = "Users", description = "Create, list and query user records."),
        (name = "Health", description = "Health check and system metrics endpoints for monitoring service status."),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_user_routes() {
        let doc = ApiDoc::openapi();
        let paths = &doc.paths.paths;
        assert!(paths.contains_key("/users"));
        assert!(paths.contains_key("/query"));
        assert!(paths.contains_key("/health"));
    }
}
