use crate::{
    database::MongoDB,
    models::User,
    services::query_composer::UserQuery,
    utils::error::AppError,
};
use async_trait::async_trait;
use futures::stream::StreamExt;
use mongodb::bson::doc;

pub const USERS_COLLECTION: &str = "users";

/// Storage handle passed explicitly to every handler.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find(&self, query: &UserQuery) -> Result<Vec<User>, AppError>;

    /// Persists the record and returns it with its storage-assigned id.
    async fn insert(&self, user: User) -> Result<User, AppError>;

    async fn ping(&self) -> Result<(), AppError>;
}

#[derive(Clone)]
pub struct MongoUserStore {
    db: MongoDB,
}

impl MongoUserStore {
    pub fn new(db: MongoDB) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserStore for MongoUserStore {
    async fn find(&self, query: &UserQuery) -> Result<Vec<User>, AppError> {
        let collection = self.db.collection::<User>(USERS_COLLECTION);
        let filter = query.to_filter();

        log::debug!("🔎 users filter: {}", filter);

        let mut cursor = collection.find(filter).await?;

        let mut users = Vec::new();
        while let Some(result) = cursor.next().await {
            users.push(result?);
        }

        Ok(users)
    }

    async fn insert(&self, mut user: User) -> Result<User, AppError> {
        let collection = self.db.collection::<User>(USERS_COLLECTION);

        let result = collection.insert_one(&user).await?;
        user.id = result.inserted_id.as_object_id();

        Ok(user)
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.db.database().run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }
}
