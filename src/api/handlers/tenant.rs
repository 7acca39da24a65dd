use axum::{extract::State, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::dtos::{requests::CreateMaintenanceRequestInput, responses::CreatedResponse};
use crate::api::extractors::{guard::TenantCaller, input::RpcInput};
use crate::domain::models::{
    maintenance::{MaintenanceRequest, NewMaintenanceParams},
    stats::TenantStats,
    tenant::Tenant,
    user::User,
};
use std::sync::Arc;
use crate::error::{AppError, TENANT_PROFILE_NOT_FOUND};
use tracing::info;

async fn tenant_profile(state: &AppState, user: &User) -> Result<Option<Tenant>, AppError> {
    state.tenant_repo.find_by_user_id(&user.id).await
}

pub async fn get_stats(
    State(state): State<Arc<AppState>>,
    TenantCaller(user): TenantCaller,
) -> Result<impl IntoResponse, AppError> {
    let stats = match tenant_profile(&state, &user).await? {
        Some(tenant) => state.stats_repo.for_tenant(&tenant.id).await?,
        None => Some(TenantStats::default()),
    };
    Ok(Json(stats))
}

pub async fn get_tenant_info(
    State(state): State<Arc<AppState>>,
    TenantCaller(user): TenantCaller,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(tenant_profile(&state, &user).await?))
}

pub async fn get_payments(
    State(state): State<Arc<AppState>>,
    TenantCaller(user): TenantCaller,
) -> Result<impl IntoResponse, AppError> {
    let payments = match tenant_profile(&state, &user).await? {
        Some(tenant) => state.payment_repo.list_by_tenant(&tenant.id).await?,
        None => Vec::new(),
    };
    Ok(Json(payments))
}

pub async fn get_invoices(
    State(state): State<Arc<AppState>>,
    TenantCaller(user): TenantCaller,
) -> Result<impl IntoResponse, AppError> {
    let invoices = match tenant_profile(&state, &user).await? {
        Some(tenant) => state.invoice_repo.list_by_tenant(&tenant.id).await?,
        None => Vec::new(),
    };
    Ok(Json(invoices))
}

pub async fn get_maintenance_requests(
    State(state): State<Arc<AppState>>,
    TenantCaller(user): TenantCaller,
) -> Result<impl IntoResponse, AppError> {
    let requests = match tenant_profile(&state, &user).await? {
        Some(tenant) => state.maintenance_repo.list_by_tenant(&tenant.id).await?,
        None => Vec::new(),
    };
    Ok(Json(requests))
}

pub async fn create_maintenance_request(
    State(state): State<Arc<AppState>>,
    TenantCaller(user): TenantCaller,
    RpcInput(payload): RpcInput<CreateMaintenanceRequestInput>,
) -> Result<impl IntoResponse, AppError> {
    let tenant = tenant_profile(&state, &user).await?
        .ok_or_else(|| AppError::NotFound(TENANT_PROFILE_NOT_FOUND.to_string()))?;

    // No property link on the lease yet, so the unit id stands in for it.
    let request = MaintenanceRequest::new(NewMaintenanceParams {
        property_id: tenant.unit_id.clone().unwrap_or_default(),
        unit_id: tenant.unit_id.clone(),
        tenant_id: Some(tenant.id.clone()),
        title: payload.title,
        description: Some(payload.description),
        priority: payload.priority,
    });
    let id = state.maintenance_repo.create(&request).await?;

    info!("Maintenance request {} opened by tenant {}", id, tenant.id);

    Ok(Json(CreatedResponse { id }))
}

pub async fn get_documents(
    State(state): State<Arc<AppState>>,
    TenantCaller(user): TenantCaller,
) -> Result<impl IntoResponse, AppError> {
    let documents = match tenant_profile(&state, &user).await? {
        Some(tenant) => state.document_repo.list_by_tenant(&tenant.id).await?,
        None => Vec::new(),
    };
    Ok(Json(documents))
}
