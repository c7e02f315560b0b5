use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Tipo de geometria GeoJSON (apenas pontos são armazenados)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum GeometryType {
    Point,
}

/// GeoJSON point. Coordinates are `[longitude, latitude]`, the order the
/// `2dsphere` index expects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GeoPoint {
    #[serde(rename = "type")]
    pub kind: GeometryType,
    #[schema(value_type = Vec<f64>)]
    pub coordinates: [f64; 2],
}

impl GeoPoint {
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            kind: GeometryType::Point,
            coordinates: [longitude, latitude],
        }
    }

    pub fn longitude(&self) -> f64 {
        self.coordinates[0]
    }

    pub fn latitude(&self) -> f64 {
        self.coordinates[1]
    }
}

/// Usuário armazenado na collection `users`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    pub username: String,

    /// Valor livre ("Male", "Female", "What's it to you?", ...)
    pub gender: String,

    pub age: i32,

    #[serde(rename = "favLang")]
    pub fav_lang: String,

    pub location: GeoPoint,

    /// Preenchido pelo cliente quando a localização veio da geolocalização HTML5
    #[serde(skip_serializing_if = "Option::is_none")]
    pub htmlverified: Option<String>,

    #[serde(default)]
    pub created_at: i64,

    #[serde(default)]
    pub updated_at: i64,
}

impl User {
    pub fn from_new(new_user: NewUser, now: i64) -> Self {
        Self {
            id: None,
            username: new_user.username,
            gender: new_user.gender,
            age: new_user.age,
            fav_lang: new_user.fav_lang,
            location: new_user.location,
            htmlverified: new_user.htmlverified,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Request para criar usuário (registro completo, sem id/timestamps)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NewUser {
    pub username: String,
    pub gender: String,
    pub age: i32,
    #[serde(rename = "favLang")]
    pub fav_lang: String,
    pub location: GeoPoint,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub htmlverified: Option<String>,
}

/// Response de usuário (id como string hex)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    pub id: String,
    pub username: String,
    pub gender: String,
    pub age: i32,
    #[serde(rename = "favLang")]
    pub fav_lang: String,
    pub location: GeoPoint,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub htmlverified: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<User> for UserResponse {
    fn from(u: User) -> Self {
        UserResponse {
            id: u.id.map(|id| id.to_hex()).unwrap_or_default(),
            username: u.username,
            gender: u.gender,
            age: u.age,
            fav_lang: u.fav_lang,
            location: u.location,
            htmlverified: u.htmlverified,
            created_at: u.created_at,
            updated_at: u.updated_at,
        }
    }
}
