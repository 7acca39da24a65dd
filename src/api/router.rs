use axum::{
    body::Body,
    extract::Request,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use crate::state::AppState;
use crate::api::handlers::{admin, auth, contact, owner, system, tenant};
use tower_http::{
    trace::TraceLayer,
    classify::ServerErrorsFailureClass,
};
use tower_cookies::CookieManagerLayer;
use tracing::{info_span, Span, error, info};
use uuid::Uuid;

/// Queries are GET with `?input=<json>`, mutations are POST with a JSON body.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(system::health))

        // System & Auth
        .route("/api/trpc/system.health", get(system::health))
        .route("/api/trpc/auth.me", get(auth::me))
        .route("/api/trpc/auth.logout", post(auth::logout))

        // Public
        .route("/api/trpc/contact.submitForm", post(contact::submit_form))

        // Admin
        .route("/api/trpc/admin.getDashboardStats", get(admin::get_dashboard_stats))
        .route("/api/trpc/admin.getAllProperties", get(admin::get_all_properties))
        .route("/api/trpc/admin.getPropertyById", get(admin::get_property_by_id))
        .route("/api/trpc/admin.createProperty", post(admin::create_property))
        .route("/api/trpc/admin.updateProperty", post(admin::update_property))
        .route("/api/trpc/admin.deleteProperty", post(admin::delete_property))
        .route("/api/trpc/admin.getAllInquiries", get(admin::get_all_inquiries))
        .route("/api/trpc/admin.getInquiryById", get(admin::get_inquiry_by_id))
        .route("/api/trpc/admin.updateInquiry", post(admin::update_inquiry))
        .route("/api/trpc/admin.getAllMaintenanceRequests", get(admin::get_all_maintenance_requests))
        .route("/api/trpc/admin.getMaintenanceRequestById", get(admin::get_maintenance_request_by_id))
        .route("/api/trpc/admin.updateMaintenanceRequest", post(admin::update_maintenance_request))
        .route("/api/trpc/admin.getAllPayments", get(admin::get_all_payments))
        .route("/api/trpc/admin.getPaymentById", get(admin::get_payment_by_id))
        .route("/api/trpc/admin.getAllTenants", get(admin::get_all_tenants))
        .route("/api/trpc/admin.getTenantById", get(admin::get_tenant_by_id))
        .route("/api/trpc/admin.getAllUsers", get(admin::get_all_users))
        .route("/api/trpc/admin.getUsersByRole", get(admin::get_users_by_role))

        // Owner
        .route("/api/trpc/owner.getStats", get(owner::get_stats))
        .route("/api/trpc/owner.getProperties", get(owner::get_properties))
        .route("/api/trpc/owner.getPropertyById", get(owner::get_property_by_id))
        .route("/api/trpc/owner.updateProperty", post(owner::update_property))
        .route("/api/trpc/owner.getTenants", get(owner::get_tenants))
        .route("/api/trpc/owner.getPayments", get(owner::get_payments))
        .route("/api/trpc/owner.getInvoices", get(owner::get_invoices))
        .route("/api/trpc/owner.getMaintenanceRequests", get(owner::get_maintenance_requests))
        .route("/api/trpc/owner.getDocuments", get(owner::get_documents))

        // Tenant
        .route("/api/trpc/tenant.getStats", get(tenant::get_stats))
        .route("/api/trpc/tenant.getTenantInfo", get(tenant::get_tenant_info))
        .route("/api/trpc/tenant.getPayments", get(tenant::get_payments))
        .route("/api/trpc/tenant.getInvoices", get(tenant::get_invoices))
        .route("/api/trpc/tenant.getMaintenanceRequests", get(tenant::get_maintenance_requests))
        .route("/api/trpc/tenant.createMaintenanceRequest", post(tenant::create_maintenance_request))
        .route("/api/trpc/tenant.getDocuments", get(tenant::get_documents))

        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = Uuid::new_v4().to_string();
                    info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = ?request.method(),
                        uri = ?request.uri(),
                        version = ?request.version(),
                        user_id = tracing::field::Empty,
                    )
                })
                .on_request(|request: &Request<Body>, _span: &Span| {
                    info!("started processing request: {} {}", request.method(), request.uri().path());
                })
                .on_response(|response: &axum::http::Response<Body>, latency: Duration, _span: &Span| {
                    info!(
                        status = response.status().as_u16(),
                        latency_ms = latency.as_millis(),
                        "finished processing request"
                    );
                })
                .on_failure(|error: ServerErrorsFailureClass, _latency: Duration, _span: &Span| {
                    error!("request failed: {:?}", error);
                })
        )
        .layer(CookieManagerLayer::new())
        .with_state(state)
}
