use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// A lease record linking a user to a unit.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Tenant {
    pub id: String,
    pub user_id: Option<String>,
    pub unit_id: Option<String>,
    pub lease_start_date: Option<DateTime<Utc>>,
    pub lease_end_date: Option<DateTime<Utc>>,
    /// active | inactive | evicted
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
