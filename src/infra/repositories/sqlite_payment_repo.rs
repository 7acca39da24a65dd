use crate::domain::{models::billing::Payment, ports::PaymentRepository};
use crate::error::AppError;
use crate::infra::db::Database;
use async_trait::async_trait;
use sqlx::Sqlite;
use std::sync::Arc;

pub struct SqlitePaymentRepo {
    db: Arc<Database<Sqlite>>,
}

impl SqlitePaymentRepo {
    pub fn new(db: Arc<Database<Sqlite>>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PaymentRepository for SqlitePaymentRepo {
    async fn list(&self) -> Result<Vec<Payment>, AppError> {
        let Some(pool) = self.db.for_read("get payments").await else {
            return Ok(Vec::new());
        };
        sqlx::query_as::<_, Payment>("SELECT * FROM payments ORDER BY created_at ASC")
            .fetch_all(&pool)
            .await
            .map_err(|e| self.db.failed("get payments", e))
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Payment>, AppError> {
        let Some(pool) = self.db.for_read("get payment").await else {
            return Ok(None);
        };
        sqlx::query_as::<_, Payment>("SELECT * FROM payments WHERE id = ? LIMIT 1")
            .bind(id)
            .fetch_optional(&pool)
            .await
            .map_err(|e| self.db.failed("get payment", e))
    }

    async fn list_by_tenant(&self, tenant_id: &str) -> Result<Vec<Payment>, AppError> {
        let Some(pool) = self.db.for_read("get tenant payments").await else {
            return Ok(Vec::new());
        };
        sqlx::query_as::<_, Payment>("SELECT * FROM payments WHERE tenant_id = ? ORDER BY created_at ASC")
            .bind(tenant_id)
            .fetch_all(&pool)
            .await
            .map_err(|e| self.db.failed("get tenant payments", e))
    }

    async fn list_for_owner(&self, _owner_id: &str) -> Result<Vec<Payment>, AppError> {
        let Some(pool) = self.db.for_read("get owner payments").await else {
            return Ok(Vec::new());
        };
        sqlx::query_as::<_, Payment>("SELECT * FROM payments ORDER BY created_at ASC")
            .fetch_all(&pool)
            .await
            .map_err(|e| self.db.failed("get owner payments", e))
    }
}
