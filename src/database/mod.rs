pub mod memory;
pub mod user_store;

pub use memory::InMemoryUserStore;
pub use user_store::{MongoUserStore, UserStore, USERS_COLLECTION};

use crate::utils::error::AppError;
use mongodb::{Client, Collection, Database};

#[derive(Clone)]
pub struct MongoDB {
    db: Database,
}

/// Extrai o nome do banco do path da URI (`mongodb://host/MeanMapApp?x=y`)
pub fn database_name_from_uri(uri: &str) -> Option<&str> {
    let rest = uri.split_once("://").map(|(_, rest)| rest).unwrap_or(uri);
    let (_, path) = rest.split_once('/')?;
    let name = path.split('?').next().unwrap_or("");

    if name.is_empty() {
        None
    } else {
        Some(name)
    }
}

/// Recriar um índice idêntico não falha no MongoDB, então qualquer erro aqui é real
fn report_index<T, E: std::fmt::Display>(name: &str, result: &Result<T, E>) -> log::Level {
    match result {
        Ok(_) => {
            log::info!("   ✅ Index ready: {}", name);
            log::Level::Info
        }
        Err(e) => {
            log::warn!("   ⚠️  Failed to create index {}: {}", name, e);
            log::Level::Warn
        }
    }
}

impl MongoDB {
    pub async fn new(uri: &str, db_name: &str) -> Result<Self, AppError> {
        let mut client_options = mongodb::options::ClientOptions::parse(uri).await?;

        client_options.max_pool_size = Some(20);
        client_options.min_pool_size = Some(2);
        client_options.max_idle_time = Some(std::time::Duration::from_secs(300));

        client_options.connect_timeout = Some(std::time::Duration::from_secs(5));
        client_options.server_selection_timeout = Some(std::time::Duration::from_secs(5));

        let client = Client::with_options(client_options)?;
        let db = client.database(db_name);

        // Test connection
        db.list_collection_names().await?;

        let mongodb = Self { db };

        mongodb.ensure_indexes().await?;

        Ok(mongodb)
    }

    /// Creates the indexes the user queries depend on. `$nearSphere` fails
    /// without the `2dsphere` index on `location`.
    async fn ensure_indexes(&self) -> Result<(), AppError> {
        use mongodb::bson::doc;
        use mongodb::IndexModel;

        log::info!("🔧 Creating database indexes...");

        let users = self.collection::<mongodb::bson::Document>(USERS_COLLECTION);

        let location_index = IndexModel::builder()
            .keys(doc! { "location": "2dsphere" })
            .build();

        report_index("users(location 2dsphere)", &users.create_index(location_index).await);

        let age_index = IndexModel::builder().keys(doc! { "age": 1 }).build();

        report_index("users(age)", &users.create_index(age_index).await);

        log::info!("✅ Database indexes ready");

        Ok(())
    }

    pub fn collection<T: Send + Sync>(&self, name: &str) -> Collection<T> {
        self.db.collection(name)
    }

    pub fn database(&self) -> &Database {
        &self.db
    }
}
