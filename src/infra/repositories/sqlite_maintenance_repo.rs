use crate::domain::{
    models::maintenance::{MaintenanceChanges, MaintenanceRequest},
    ports::MaintenanceRepository,
};
use crate::error::AppError;
use crate::infra::db::Database;
use async_trait::async_trait;
use chrono::Utc;
use sqlx::{QueryBuilder, Sqlite};
use std::sync::Arc;

pub struct SqliteMaintenanceRepo {
    db: Arc<Database<Sqlite>>,
}

impl SqliteMaintenanceRepo {
    pub fn new(db: Arc<Database<Sqlite>>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl MaintenanceRepository for SqliteMaintenanceRepo {
    async fn list(&self) -> Result<Vec<MaintenanceRequest>, AppError> {
        let Some(pool) = self.db.for_read("get maintenance requests").await else {
            return Ok(Vec::new());
        };
        sqlx::query_as::<_, MaintenanceRequest>("SELECT * FROM maintenance_requests ORDER BY created_at ASC")
            .fetch_all(&pool)
            .await
            .map_err(|e| self.db.failed("get maintenance requests", e))
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<MaintenanceRequest>, AppError> {
        let Some(pool) = self.db.for_read("get maintenance request").await else {
            return Ok(None);
        };
        sqlx::query_as::<_, MaintenanceRequest>("SELECT * FROM maintenance_requests WHERE id = ? LIMIT 1")
            .bind(id)
            .fetch_optional(&pool)
            .await
            .map_err(|e| self.db.failed("get maintenance request", e))
    }

    async fn create(&self, request: &MaintenanceRequest) -> Result<String, AppError> {
        let pool = self.db.for_write("create maintenance request").await?;
        sqlx::query(
            "INSERT INTO maintenance_requests (id, property_id, unit_id, tenant_id, title, description, priority, status, assigned_to, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)"
        )
            .bind(&request.id)
            .bind(&request.property_id)
            .bind(&request.unit_id)
            .bind(&request.tenant_id)
            .bind(&request.title)
            .bind(&request.description)
            .bind(&request.priority)
            .bind(&request.status)
            .bind(&request.assigned_to)
            .bind(request.created_at)
            .bind(request.updated_at)
            .execute(&pool)
            .await
            .map_err(|e| self.db.failed("create maintenance request", e))?;
        Ok(request.id.clone())
    }

    async fn update(&self, id: &str, changes: &MaintenanceChanges) -> Result<(), AppError> {
        let pool = self.db.for_write("update maintenance request").await?;

        let mut qb = QueryBuilder::<Sqlite>::new("UPDATE maintenance_requests SET updated_at = ");
        qb.push_bind(Utc::now());
        if let Some(v) = changes.status { qb.push(", status = ").push_bind(v.as_str()); }
        if let Some(v) = changes.priority { qb.push(", priority = ").push_bind(v.as_str()); }
        if let Some(v) = &changes.assigned_to { qb.push(", assigned_to = ").push_bind(v.clone()); }
        qb.push(" WHERE id = ").push_bind(id.to_string());

        qb.build()
            .execute(&pool)
            .await
            .map_err(|e| self.db.failed("update maintenance request", e))?;
        Ok(())
    }

    async fn list_by_tenant(&self, tenant_id: &str) -> Result<Vec<MaintenanceRequest>, AppError> {
        let Some(pool) = self.db.for_read("get tenant maintenance requests").await else {
            return Ok(Vec::new());
        };
        sqlx::query_as::<_, MaintenanceRequest>("SELECT * FROM maintenance_requests WHERE tenant_id = ? ORDER BY created_at ASC")
            .bind(tenant_id)
            .fetch_all(&pool)
            .await
            .map_err(|e| self.db.failed("get tenant maintenance requests", e))
    }

    async fn list_for_owner(&self, _owner_id: &str) -> Result<Vec<MaintenanceRequest>, AppError> {
        let Some(pool) = self.db.for_read("get owner maintenance requests").await else {
            return Ok(Vec::new());
        };
        sqlx::query_as::<_, MaintenanceRequest>("SELECT * FROM maintenance_requests ORDER BY created_at ASC")
            .fetch_all(&pool)
            .await
            .map_err(|e| self.db.failed("get owner maintenance requests", e))
    }
}
