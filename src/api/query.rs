use actix_web::{web, HttpResponse, ResponseError};
use crate::{database::UserStore, services::{user_service, QueryRequest}};

#[utoipa::path(
    post,
    path = "/query",
    tag = "Users",
    request_body = QueryRequest,
    responses(
        (status = 200, description = "Users matching every supplied filter", body = [crate::models::UserResponse]),
        (status = 400, description = "Invalid filter combination"),
        (status = 500, description = "Storage failure")
    )
)]
/// POST /query - Busca usuários por distância, gênero, idade, linguagem e verificação
pub async fn query_users(
    store: web::Data<dyn UserStore>,
    body: web::Json<QueryRequest>,
) -> HttpResponse {
    log::info!("🔎 POST /query - {:?}", body);

    match user_service::query_users(store.get_ref(), &body).await {
        Ok(users) => {
            log::info!("✅ Query matched {} users", users.len());
            HttpResponse::Ok().json(users)
        }
        Err(e) => {
            log::error!("❌ Query failed: {}", e);
            e.error_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::api::{self, test_support::*};
    use crate::database::UserStore;
    use crate::models::NewUser;
    use crate::services::{user_service, VERIFIED_SENTINEL};
    use actix_web::{http::StatusCode, test, web, App};

    async fn seeded_store() -> web::Data<dyn UserStore> {
        let store = memory_store();

        let mut verified = user_body("sf-verified", "Female", 34, "rust", -122.4170, 37.7760);
        verified["htmlverified"] = serde_json::json!(VERIFIED_SENTINEL);

        let users = vec![
            verified,
            user_body("oakland", "Male", 30, "go", -122.2711, 37.8044),
            user_body("san-jose", "Male", 29, "rust", -121.8863, 37.3382),
            user_body("nyc", "What's it to you?", 52, "Rust", -74.0060, 40.7128),
        ];

        for body in users {
            let new_user: NewUser = serde_json::from_value(body).unwrap();
            user_service::create_user(store.get_ref(), new_user).await.unwrap();
        }

        store
    }

    fn query(body: serde_json::Value) -> actix_web::test::TestRequest {
        test::TestRequest::post().uri("/query").set_json(body)
    }

    fn names(users: Vec<serde_json::Value>) -> Vec<String> {
        let mut names: Vec<String> = users
            .iter()
            .map(|u| u["username"].as_str().unwrap_or_default().to_string())
            .collect();
        names.sort();
        names
    }

    #[actix_rt::test]
    async fn test_empty_query_matches_list() {
        let app = test::init_service(App::new().app_data(seeded_store().await).configure(api::configure)).await;

        let req = test::TestRequest::get().uri("/users").to_request();
        let all: Vec<serde_json::Value> = test::call_and_read_body_json(&app, req).await;

        let req = query(serde_json::json!({})).to_request();
        let queried: Vec<serde_json::Value> = test::call_and_read_body_json(&app, req).await;

        assert_eq!(all.len(), 4);
        assert_eq!(names(queried), names(all));
    }

    #[actix_rt::test]
    async fn test_min_age_only() {
        let app = test::init_service(App::new().app_data(seeded_store().await).configure(api::configure)).await;

        let req = query(serde_json::json!({ "minAge": 30 })).to_request();
        let users: Vec<serde_json::Value> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(names(users), vec!["nyc", "oakland", "sf-verified"]);
    }

    #[actix_rt::test]
    async fn test_distance_ten_miles() {
        let app = test::init_service(App::new().app_data(seeded_store().await).configure(api::configure)).await;

        let req = query(serde_json::json!({ "distance": 10, "latitude": 37.7749, "longitude": -122.4194 }))
            .to_request();
        let users: Vec<serde_json::Value> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(names(users), vec!["oakland", "sf-verified"]);
    }

    #[actix_rt::test]
    async fn test_fav_lang_exact_match() {
        let app = test::init_service(App::new().app_data(seeded_store().await).configure(api::configure)).await;

        let req = query(serde_json::json!({ "favLang": "rust" })).to_request();
        let users: Vec<serde_json::Value> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(names(users), vec!["san-jose", "sf-verified"]);
    }

    #[actix_rt::test]
    async fn test_gender_or_combined_with_age() {
        let app = test::init_service(App::new().app_data(seeded_store().await).configure(api::configure)).await;

        let req = query(serde_json::json!({ "male": "Male", "other": "What's it to you?", "maxAge": 35 }))
            .to_request();
        let users: Vec<serde_json::Value> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(names(users), vec!["oakland", "san-jose"]);
    }

    #[actix_rt::test]
    async fn test_verified_only() {
        let app = test::init_service(App::new().app_data(seeded_store().await).configure(api::configure)).await;

        let req = query(serde_json::json!({ "reqVerified": true })).to_request();
        let users: Vec<serde_json::Value> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(names(users), vec!["sf-verified"]);
    }

    #[actix_rt::test]
    async fn test_query_is_idempotent() {
        let app = test::init_service(App::new().app_data(seeded_store().await).configure(api::configure)).await;
        let body = serde_json::json!({ "distance": 50, "latitude": 37.7749, "longitude": -122.4194, "minAge": 30 });

        let first: Vec<serde_json::Value> =
            test::call_and_read_body_json(&app, query(body.clone()).to_request()).await;
        let second: Vec<serde_json::Value> =
            test::call_and_read_body_json(&app, query(body).to_request()).await;

        assert_eq!(first, second);
        assert_eq!(names(first), vec!["oakland", "sf-verified"]);
    }

    #[actix_rt::test]
    async fn test_distance_without_coordinates_is_bad_request() {
        let app = test::init_service(App::new().app_data(seeded_store().await).configure(api::configure)).await;

        let resp = test::call_service(&app, query(serde_json::json!({ "distance": 10 })).to_request()).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], false);
    }

    #[actix_rt::test]
    async fn test_unchecked_gender_flag_is_ignored() {
        let app = test::init_service(App::new().app_data(seeded_store().await).configure(api::configure)).await;

        let req = query(serde_json::json!({ "male": false, "female": "Female" })).to_request();
        let users: Vec<serde_json::Value> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(names(users), vec!["sf-verified"]);
    }

    #[actix_rt::test]
    async fn test_storage_failure_returns_500() {
        let app = test::init_service(App::new().app_data(unreachable_store()).configure(api::configure)).await;

        let resp = test::call_service(&app, query(serde_json::json!({ "minAge": 30 })).to_request()).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "Database error: connection refused");
    }
}
