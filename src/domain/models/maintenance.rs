use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use validator::Validate;

use super::generate_id;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaintenancePriority {
    Low,
    #[default]
    Medium,
    High,
    Urgent,
}

impl MaintenancePriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            MaintenancePriority::Low => "low",
            MaintenancePriority::Medium => "medium",
            MaintenancePriority::High => "high",
            MaintenancePriority::Urgent => "urgent",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaintenanceStatus {
    Open,
    InProgress,
    Completed,
    Closed,
}

impl MaintenanceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MaintenanceStatus::Open => "open",
            MaintenanceStatus::InProgress => "in_progress",
            MaintenanceStatus::Completed => "completed",
            MaintenanceStatus::Closed => "closed",
        }
    }
}

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceRequest {
    pub id: String,
    pub property_id: String,
    pub unit_id: Option<String>,
    pub tenant_id: Option<String>,
    pub title: String,
    pub description: Option<String>,
    pub priority: String,
    pub status: String,
    pub assigned_to: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub struct NewMaintenanceParams {
    pub property_id: String,
    pub unit_id: Option<String>,
    pub tenant_id: Option<String>,
    pub title: String,
    pub description: Option<String>,
    pub priority: MaintenancePriority,
}

impl MaintenanceRequest {
    pub fn new(params: NewMaintenanceParams) -> Self {
        let now = Utc::now();
        Self {
            id: generate_id("maint"),
            property_id: params.property_id,
            unit_id: params.unit_id,
            tenant_id: params.tenant_id,
            title: params.title,
            description: params.description,
            priority: params.priority.as_str().to_string(),
            status: MaintenanceStatus::Open.as_str().to_string(),
            assigned_to: None,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Status and priority change independently; no transition rules apply.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceChanges {
    pub status: Option<MaintenanceStatus>,
    pub priority: Option<MaintenancePriority>,
    pub assigned_to: Option<String>,
}
