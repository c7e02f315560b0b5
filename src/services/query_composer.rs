// ==================== QUERY COMPOSER ====================
// Traduz os filtros opcionais do POST /query em uma única consulta.
// Todos os filtros presentes são combinados com AND; o filtro de gênero
// entra como um único termo (gender IN [male, female, other]).

use crate::{
    models::{GeoPoint, User},
    utils::{
        error::AppError,
        geo::{haversine_meters, miles_to_meters},
    },
};
use mongodb::bson::{doc, Document};
use serde::{de, Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

/// Valor gravado pelo cliente quando a localização foi confirmada via HTML5
pub const VERIFIED_SENTINEL: &str = "Thanks for the real data.";

/// Corpo do POST /query. Campos ausentes, zero ou vazios não filtram nada.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct QueryRequest {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// Raio em milhas
    pub distance: Option<f64>,
    #[serde(default, deserialize_with = "gender_option")]
    pub male: Option<String>,
    #[serde(default, deserialize_with = "gender_option")]
    pub female: Option<String>,
    #[serde(default, deserialize_with = "gender_option")]
    pub other: Option<String>,
    pub min_age: Option<i32>,
    pub max_age: Option<i32>,
    pub fav_lang: Option<String>,
    pub req_verified: Option<bool>,
}

/// Checkboxes de gênero chegam como texto, ou `false`/`null` quando desmarcados
fn gender_option<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum GenderValue {
        Text(String),
        Flag(bool),
    }

    match Option::<GenderValue>::deserialize(deserializer)? {
        None | Some(GenderValue::Flag(false)) => Ok(None),
        Some(GenderValue::Text(value)) => Ok(Some(value)),
        Some(GenderValue::Flag(true)) => Err(de::Error::custom(
            "gender filters must be a text value, false or null",
        )),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NearFilter {
    pub center: GeoPoint,
    pub max_distance_meters: f64,
}

/// Typed form of a composed query. Rendered to a MongoDB filter by
/// [`UserQuery::to_filter`] and evaluated in process by [`UserQuery::matches`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserQuery {
    pub near: Option<NearFilter>,
    pub genders: Vec<String>,
    pub min_age: Option<i32>,
    pub max_age: Option<i32>,
    pub fav_lang: Option<String>,
    pub require_verified: bool,
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value.as_ref().filter(|s| !s.is_empty()).cloned()
}

fn non_zero(value: Option<i32>) -> Option<i32> {
    value.filter(|v| *v != 0)
}

pub fn compose(req: &QueryRequest) -> Result<UserQuery, AppError> {
    let mut query = UserQuery::default();

    if let Some(distance) = req.distance.filter(|d| *d != 0.0) {
        if !distance.is_finite() || distance < 0.0 {
            return Err(AppError::InvalidQuery(format!(
                "distance must be a positive number of miles, got {}",
                distance
            )));
        }

        let (longitude, latitude) = match (req.longitude, req.latitude) {
            (Some(lng), Some(lat)) => (lng, lat),
            _ => {
                return Err(AppError::InvalidQuery(
                    "distance requires both latitude and longitude".to_string(),
                ))
            }
        };

        if !(-90.0..=90.0).contains(&latitude) {
            return Err(AppError::InvalidQuery(format!("latitude out of range: {}", latitude)));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(AppError::InvalidQuery(format!("longitude out of range: {}", longitude)));
        }

        query.near = Some(NearFilter {
            center: GeoPoint::new(longitude, latitude),
            max_distance_meters: miles_to_meters(distance),
        });
    }

    query.genders = [&req.male, &req.female, &req.other]
        .into_iter()
        .filter_map(non_empty)
        .collect();

    query.min_age = non_zero(req.min_age);
    query.max_age = non_zero(req.max_age);
    query.fav_lang = non_empty(&req.fav_lang);
    query.require_verified = req.req_verified.unwrap_or(false);

    Ok(query)
}

impl UserQuery {
    pub fn is_unfiltered(&self) -> bool {
        *self == UserQuery::default()
    }

    /// Filtro MongoDB equivalente (todas as chaves no topo = AND implícito)
    pub fn to_filter(&self) -> Document {
        let mut filter = Document::new();

        if let Some(near) = &self.near {
            filter.insert(
                "location",
                doc! {
                    "$nearSphere": {
                        "$geometry": {
                            "type": "Point",
                            "coordinates": [near.center.longitude(), near.center.latitude()],
                        },
                        "$maxDistance": near.max_distance_meters,
                    }
                },
            );
        }

        if !self.genders.is_empty() {
            filter.insert("gender", doc! { "$in": self.genders.clone() });
        }

        let mut age = Document::new();
        if let Some(min) = self.min_age {
            age.insert("$gte", min);
        }
        if let Some(max) = self.max_age {
            age.insert("$lte", max);
        }
        if !age.is_empty() {
            filter.insert("age", age);
        }

        if let Some(lang) = &self.fav_lang {
            filter.insert("favLang", lang.as_str());
        }

        if self.require_verified {
            filter.insert("htmlverified", VERIFIED_SENTINEL);
        }

        filter
    }

    /// Distance from the query center, when a distance filter is active.
    pub fn distance_to(&self, user: &User) -> Option<f64> {
        self.near
            .as_ref()
            .map(|near| haversine_meters(near.center.coordinates, user.location.coordinates))
    }

    pub fn matches(&self, user: &User) -> bool {
        if let Some(near) = &self.near {
            if haversine_meters(near.center.coordinates, user.location.coordinates)
                > near.max_distance_meters
            {
                return false;
            }
        }

        if !self.genders.is_empty() && !self.genders.iter().any(|g| *g == user.gender) {
            return false;
        }

        if self.min_age.is_some_and(|min| user.age < min) {
            return false;
        }

        if self.max_age.is_some_and(|max| user.age > max) {
            return false;
        }

        if let Some(lang) = &self.fav_lang {
            if *lang != user.fav_lang {
                return false;
            }
        }

        if self.require_verified && user.htmlverified.as_deref() != Some(VERIFIED_SENTINEL) {
            return false;
        }

        true
    }
}
