use actix_web::{web, HttpResponse, ResponseError};
use crate::{database::UserStore, models::NewUser, services::user_service};

#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    responses(
        (status = 200, description = "All stored users", body = [crate::models::UserResponse]),
        (status = 500, description = "Storage failure")
    )
)]
/// GET /users - Lista todos os usuários
pub async fn list_users(store: web::Data<dyn UserStore>) -> HttpResponse {
    log::info!("👥 GET /users - Listing all users");

    match user_service::list_users(store.get_ref()).await {
        Ok(users) => {
            log::info!("✅ Users retrieved: {}", users.len());
            HttpResponse::Ok().json(users)
        }
        Err(e) => {
            log::error!("❌ Failed to list users: {}", e);
            e.error_response()
        }
    }
}

#[utoipa::path(
    post,
    path = "/users",
    tag = "Users",
    request_body = NewUser,
    responses(
        (status = 200, description = "Echo of the stored record", body = NewUser),
        (status = 400, description = "Malformed user record"),
        (status = 500, description = "Storage failure")
    )
)]
/// POST /users - Cria usuário e devolve o corpo enviado
pub async fn create_user(
    store: web::Data<dyn UserStore>,
    body: web::Json<NewUser>,
) -> HttpResponse {
    let new_user = body.into_inner();
    log::info!("👤 POST /users - Creating user {}", new_user.username);

    match user_service::create_user(store.get_ref(), new_user.clone()).await {
        Ok(saved) => {
            log::info!(
                "✅ User created: {}",
                saved.id.map(|id| id.to_hex()).unwrap_or_default()
            );
            HttpResponse::Ok().json(new_user)
        }
        Err(e) => {
            log::error!("❌ Failed to create user: {}", e);
            e.error_response()
        }
    }
}
