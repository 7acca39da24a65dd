use serde::Serialize;

#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_properties: i64,
    pub total_tenants: i64,
    pub open_maintenance_requests: i64,
    /// Sum of completed payments as an exact decimal string.
    pub total_revenue: String,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OwnerStats {
    pub total_properties: i64,
    pub total_tenants: i64,
    pub total_revenue: String,
    pub pending_maintenance: i64,
}

#[derive(Debug, Serialize, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct TenantStats {
    pub total_payments: i64,
    pub total_invoices: i64,
    pub total_maintenance_requests: i64,
}
