use crate::domain::{
    models::stats::{DashboardStats, OwnerStats, TenantStats},
    ports::StatsRepository,
    services::revenue::sum_amounts,
};
use crate::error::AppError;
use crate::infra::db::Database;
use async_trait::async_trait;
use sqlx::Postgres;
use std::sync::Arc;

pub struct PostgresStatsRepo {
    db: Arc<Database<Postgres>>,
}

impl PostgresStatsRepo {
    pub fn new(db: Arc<Database<Postgres>>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl StatsRepository for PostgresStatsRepo {
    async fn dashboard(&self) -> Result<Option<DashboardStats>, AppError> {
        let Some(pool) = self.db.for_read("get dashboard stats").await else {
            return Ok(None);
        };

        let (properties, tenants, open_maintenance, revenue) = tokio::try_join!(
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM properties").fetch_one(&pool),
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM tenants").fetch_one(&pool),
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM maintenance_requests WHERE status = 'open'").fetch_one(&pool),
            sqlx::query_scalar::<_, String>("SELECT amount FROM payments WHERE status = 'completed'").fetch_all(&pool),
        )
        .map_err(|e| self.db.failed("get dashboard stats", e))?;

        Ok(Some(DashboardStats {
            total_properties: properties,
            total_tenants: tenants,
            open_maintenance_requests: open_maintenance,
            total_revenue: sum_amounts(&revenue)?.to_string(),
        }))
    }

    async fn for_owner(&self, owner_id: &str) -> Result<Option<OwnerStats>, AppError> {
        let Some(pool) = self.db.for_read("get owner stats").await else {
            return Ok(None);
        };

        // Only the property count is scoped to the owner.
        let (properties, tenants, maintenance, revenue) = tokio::try_join!(
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM properties WHERE owner_id = $1").bind(owner_id).fetch_one(&pool),
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM tenants").fetch_one(&pool),
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM maintenance_requests").fetch_one(&pool),
            sqlx::query_scalar::<_, String>("SELECT amount FROM payments").fetch_all(&pool),
        )
        .map_err(|e| self.db.failed("get owner stats", e))?;

        Ok(Some(OwnerStats {
            total_properties: properties,
            total_tenants: tenants,
            total_revenue: sum_amounts(&revenue)?.to_string(),
            pending_maintenance: maintenance,
        }))
    }

    async fn for_tenant(&self, tenant_id: &str) -> Result<Option<TenantStats>, AppError> {
        let Some(pool) = self.db.for_read("get tenant stats").await else {
            return Ok(None);
        };

        let (payments, invoices, maintenance) = tokio::try_join!(
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM payments WHERE tenant_id = $1").bind(tenant_id).fetch_one(&pool),
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM invoices WHERE tenant_id = $1").bind(tenant_id).fetch_one(&pool),
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM maintenance_requests WHERE tenant_id = $1").bind(tenant_id).fetch_one(&pool),
        )
        .map_err(|e| self.db.failed("get tenant stats", e))?;

        Ok(Some(TenantStats {
            total_payments: payments,
            total_invoices: invoices,
            total_maintenance_requests: maintenance,
        }))
    }
}
