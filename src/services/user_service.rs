use crate::{
    database::UserStore,
    models::{NewUser, User, UserResponse},
    services::query_composer::{self, QueryRequest, UserQuery},
    utils::error::AppError,
};

pub async fn list_users(store: &dyn UserStore) -> Result<Vec<UserResponse>, AppError> {
    let users = store.find(&UserQuery::default()).await?;
    Ok(users.into_iter().map(UserResponse::from).collect())
}

/// Persists the submitted record. Returns the stored user (with id).
pub async fn create_user(store: &dyn UserStore, new_user: NewUser) -> Result<User, AppError> {
    let now = chrono::Utc::now().timestamp();
    store.insert(User::from_new(new_user, now)).await
}

pub async fn query_users(
    store: &dyn UserStore,
    request: &QueryRequest,
) -> Result<Vec<UserResponse>, AppError> {
    let query = query_composer::compose(request)?;
    if query.is_unfiltered() {
        log::debug!("No filters supplied, returning every user");
    }
    let users = store.find(&query).await?;
    Ok(users.into_iter().map(UserResponse::from).collect())
}
