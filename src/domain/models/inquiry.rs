use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use validator::Validate;

use super::generate_id;

/// Admins move inquiries between any two states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InquiryStatus {
    New,
    Contacted,
    Qualified,
    Closed,
}

impl InquiryStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            InquiryStatus::New => "new",
            InquiryStatus::Contacted => "contacted",
            InquiryStatus::Qualified => "qualified",
            InquiryStatus::Closed => "closed",
        }
    }
}

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Inquiry {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub property_type: Option<String>,
    pub message: Option<String>,
    pub property_id: Option<String>,
    pub status: String,
    pub notes: Option<String>,
    pub assigned_to: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub struct NewInquiryParams {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub property_type: Option<String>,
    pub message: String,
}

impl Inquiry {
    pub fn new(params: NewInquiryParams) -> Self {
        let now = Utc::now();
        Self {
            id: generate_id("inq"),
            name: params.name,
            email: params.email,
            phone: params.phone,
            property_type: params.property_type,
            message: Some(params.message),
            property_id: None,
            status: InquiryStatus::New.as_str().to_string(),
            notes: None,
            assigned_to: None,
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct InquiryChanges {
    pub status: Option<InquiryStatus>,
    pub notes: Option<String>,
    pub assigned_to: Option<String>,
}
