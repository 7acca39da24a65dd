use std::sync::Arc;
use crate::domain::ports::{
    DocumentRepository, InquiryRepository, InvoiceRepository, MaintenanceRepository,
    NotificationService, PaymentRepository, PropertyRepository, StatsRepository,
    StoreHealth, TenantRepository, UserRepository,
};
use crate::domain::services::session_service::SessionService;
use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub user_repo: Arc<dyn UserRepository>,
    pub property_repo: Arc<dyn PropertyRepository>,
    pub inquiry_repo: Arc<dyn InquiryRepository>,
    pub maintenance_repo: Arc<dyn MaintenanceRepository>,
    pub payment_repo: Arc<dyn PaymentRepository>,
    pub invoice_repo: Arc<dyn InvoiceRepository>,
    pub tenant_repo: Arc<dyn TenantRepository>,
    pub document_repo: Arc<dyn DocumentRepository>,
    pub stats_repo: Arc<dyn StatsRepository>,
    pub database: Arc<dyn StoreHealth>,
    pub session_service: Arc<SessionService>,
    pub notification_service: Arc<dyn NotificationService>,
}
