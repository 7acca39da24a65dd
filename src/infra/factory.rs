use std::sync::Arc;
use sqlx::{Postgres, Sqlite};
use tracing::{info, warn};

use crate::config::Config;
use crate::domain::ports::NotificationService;
use crate::domain::services::session_service::SessionService;
use crate::infra::db::Database;
use crate::infra::notification::http_notification_service::HttpNotificationService;
use crate::infra::repositories::{
    postgres_document_repo::PostgresDocumentRepo, postgres_inquiry_repo::PostgresInquiryRepo,
    postgres_invoice_repo::PostgresInvoiceRepo, postgres_maintenance_repo::PostgresMaintenanceRepo,
    postgres_payment_repo::PostgresPaymentRepo, postgres_property_repo::PostgresPropertyRepo,
    postgres_stats_repo::PostgresStatsRepo, postgres_tenant_repo::PostgresTenantRepo,
    postgres_user_repo::PostgresUserRepo,
    sqlite_document_repo::SqliteDocumentRepo, sqlite_inquiry_repo::SqliteInquiryRepo,
    sqlite_invoice_repo::SqliteInvoiceRepo, sqlite_maintenance_repo::SqliteMaintenanceRepo,
    sqlite_payment_repo::SqlitePaymentRepo, sqlite_property_repo::SqlitePropertyRepo,
    sqlite_stats_repo::SqliteStatsRepo, sqlite_tenant_repo::SqliteTenantRepo,
    sqlite_user_repo::SqliteUserRepo,
};
use crate::state::AppState;

pub fn is_postgres_url(url: &str) -> bool {
    url.starts_with("postgres://") || url.starts_with("postgresql://")
}

/// Wires repositories for the configured backend. Nothing connects here;
/// the pool opens on first use.
pub fn bootstrap_state(config: &Config) -> AppState {
    let notification_service: Arc<dyn NotificationService> = Arc::new(HttpNotificationService::new(
        config.notification_service_url.clone(),
        config.notification_service_token.clone(),
    ));
    bootstrap_state_with(config, notification_service)
}

/// Same as [`bootstrap_state`] with a caller-supplied notifier.
pub fn bootstrap_state_with(config: &Config, notification_service: Arc<dyn NotificationService>) -> AppState {
    let session_service = Arc::new(SessionService::new(&config.jwt_secret));

    match config.database_url.as_deref() {
        Some(url) if is_postgres_url(url) => {
            info!("Initializing PostgreSQL store...");
            let db = Arc::new(Database::<Postgres>::new(Some(url.to_string())));

            AppState {
                config: config.clone(),
                user_repo: Arc::new(PostgresUserRepo::new(db.clone())),
                property_repo: Arc::new(PostgresPropertyRepo::new(db.clone())),
                inquiry_repo: Arc::new(PostgresInquiryRepo::new(db.clone())),
                maintenance_repo: Arc::new(PostgresMaintenanceRepo::new(db.clone())),
                payment_repo: Arc::new(PostgresPaymentRepo::new(db.clone())),
                invoice_repo: Arc::new(PostgresInvoiceRepo::new(db.clone())),
                tenant_repo: Arc::new(PostgresTenantRepo::new(db.clone())),
                document_repo: Arc::new(PostgresDocumentRepo::new(db.clone())),
                stats_repo: Arc::new(PostgresStatsRepo::new(db.clone())),
                database: db,
                session_service,
                notification_service,
            }
        }
        url => {
            let db = match url {
                Some(url) => {
                    info!("Initializing SQLite store...");
                    Arc::new(Database::<Sqlite>::new(Some(url.to_string())))
                }
                None => {
                    warn!("[Database] DATABASE_URL is not set: reads return empty results and writes fail");
                    Arc::new(Database::<Sqlite>::unconfigured())
                }
            };

            AppState {
                config: config.clone(),
                user_repo: Arc::new(SqliteUserRepo::new(db.clone())),
                property_repo: Arc::new(SqlitePropertyRepo::new(db.clone())),
                inquiry_repo: Arc::new(SqliteInquiryRepo::new(db.clone())),
                maintenance_repo: Arc::new(SqliteMaintenanceRepo::new(db.clone())),
                payment_repo: Arc::new(SqlitePaymentRepo::new(db.clone())),
                invoice_repo: Arc::new(SqliteInvoiceRepo::new(db.clone())),
                tenant_repo: Arc::new(SqliteTenantRepo::new(db.clone())),
                document_repo: Arc::new(SqliteDocumentRepo::new(db.clone())),
                stats_repo: Arc::new(SqliteStatsRepo::new(db.clone())),
                database: db,
                session_service,
                notification_service,
            }
        }
    }
}
