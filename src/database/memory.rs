// Store em memória - usado nos testes e com STORE_BACKEND=memory
use crate::{
    database::UserStore,
    models::User,
    services::query_composer::UserQuery,
    utils::error::AppError,
};
use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryUserStore {
    users: RwLock<Vec<User>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn find(&self, query: &UserQuery) -> Result<Vec<User>, AppError> {
        let users = self.users.read().await;

        let mut found: Vec<(Option<f64>, User)> = users
            .iter()
            .filter(|u| query.matches(u))
            .map(|u| (query.distance_to(u), u.clone()))
            .collect();

        // $nearSphere devolve do mais próximo para o mais distante
        if query.near.is_some() {
            found.sort_by(|a, b| a.0.unwrap_or(0.0).total_cmp(&b.0.unwrap_or(0.0)));
        }

        Ok(found.into_iter().map(|(_, u)| u).collect())
    }

    async fn insert(&self, mut user: User) -> Result<User, AppError> {
        if user.id.is_none() {
            user.id = Some(ObjectId::new());
        }

        self.users.write().await.push(user.clone());
        Ok(user)
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}
