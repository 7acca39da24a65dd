use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use validator::Validate;

use super::{generate_id, validate_decimal_amount};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PropertyType {
    Rent,
    Sale,
}

impl PropertyType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyType::Rent => "Rent",
            PropertyType::Sale => "Sale",
        }
    }
}

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: String,
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    /// Exact decimal, e.g. "350000.00".
    pub price: String,
    #[serde(rename = "type")]
    pub property_type: String,
    pub beds: i32,
    pub baths: f64,
    pub sqft: i32,
    pub description: Option<String>,
    pub amenities: Option<String>,
    pub images: Option<String>,
    pub featured: bool,
    pub active: bool,
    pub owner_id: Option<String>,
    pub created_by: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewPropertyParams {
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    #[validate(custom(function = "validate_decimal_amount"))]
    pub price: String,
    #[serde(rename = "type")]
    pub property_type: PropertyType,
    #[validate(range(min = 0))]
    pub beds: i32,
    #[validate(range(min = 0.0))]
    pub baths: f64,
    #[validate(range(min = 0))]
    pub sqft: i32,
    pub description: Option<String>,
    pub amenities: Option<String>,
    pub images: Option<String>,
    pub featured: Option<bool>,
    pub owner_id: Option<String>,
}

impl Property {
    pub fn new(params: NewPropertyParams, created_by: Option<String>) -> Self {
        let now = Utc::now();
        Self {
            id: generate_id("prop"),
            name: params.name,
            address: params.address,
            city: params.city,
            state: params.state,
            zip_code: params.zip_code,
            price: params.price,
            property_type: params.property_type.as_str().to_string(),
            beds: params.beds,
            baths: params.baths,
            sqft: params.sqft,
            description: params.description,
            amenities: params.amenities,
            images: params.images,
            featured: params.featured.unwrap_or(false),
            active: true,
            owner_id: params.owner_id,
            created_by,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Partial update: only `Some` fields are written.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PropertyChanges {
    pub name: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    #[validate(custom(function = "validate_decimal_amount"))]
    pub price: Option<String>,
    #[serde(rename = "type")]
    pub property_type: Option<PropertyType>,
    #[validate(range(min = 0))]
    pub beds: Option<i32>,
    #[validate(range(min = 0.0))]
    pub baths: Option<f64>,
    #[validate(range(min = 0))]
    pub sqft: Option<i32>,
    pub description: Option<String>,
    pub amenities: Option<String>,
    pub images: Option<String>,
    pub featured: Option<bool>,
    pub active: Option<bool>,
}
