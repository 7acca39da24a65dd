use crate::domain::{models::billing::Invoice, ports::InvoiceRepository};
use crate::error::AppError;
use crate::infra::db::Database;
use async_trait::async_trait;
use sqlx::Sqlite;
use std::sync::Arc;

pub struct SqliteInvoiceRepo {
    db: Arc<Database<Sqlite>>,
}

impl SqliteInvoiceRepo {
    pub fn new(db: Arc<Database<Sqlite>>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl InvoiceRepository for SqliteInvoiceRepo {
    async fn list_by_tenant(&self, tenant_id: &str) -> Result<Vec<Invoice>, AppError> {
        let Some(pool) = self.db.for_read("get tenant invoices").await else {
            return Ok(Vec::new());
        };
        sqlx::query_as::<_, Invoice>("SELECT * FROM invoices WHERE tenant_id = ? ORDER BY due_date ASC")
            .bind(tenant_id)
            .fetch_all(&pool)
            .await
            .map_err(|e| self.db.failed("get tenant invoices", e))
    }

    async fn list_for_owner(&self, _owner_id: &str) -> Result<Vec<Invoice>, AppError> {
        let Some(pool) = self.db.for_read("get owner invoices").await else {
            return Ok(Vec::new());
        };
        sqlx::query_as::<_, Invoice>("SELECT * FROM invoices ORDER BY due_date ASC")
            .fetch_all(&pool)
            .await
            .map_err(|e| self.db.failed("get owner invoices", e))
    }
}
