mod common;

use axum::http::StatusCode;
use common::TestApp;
use serde_json::json;

#[tokio::test]
async fn test_properties_are_scoped_to_caller() {
    let app = TestApp::new().await;
    let owner = app.login_as("user_owner", "owner").await;
    app.login_as("user_other", "owner").await;
    app.seed_property("prop_mine", Some("user_owner")).await;
    app.seed_property("prop_theirs", Some("user_other")).await;

    let (status, body) = app.query("owner.getProperties", None, Some(&owner)).await;
    assert_eq!(status, StatusCode::OK);
    let list = body.as_array().unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["id"], "prop_mine");
    assert_eq!(list[0]["ownerId"], "user_owner");
}

#[tokio::test]
async fn test_property_by_id_hides_other_owners() {
    let app = TestApp::new().await;
    let owner = app.login_as("user_owner", "owner").await;
    let admin = app.login_as("user_admin", "admin").await;
    app.login_as("user_other", "owner").await;
    app.seed_property("prop_mine", Some("user_owner")).await;
    app.seed_property("prop_theirs", Some("user_other")).await;

    let (_, body) = app.query("owner.getPropertyById", Some(json!("prop_mine")), Some(&owner)).await;
    assert_eq!(body["id"], "prop_mine");

    let (status, body) = app.query("owner.getPropertyById", Some(json!("prop_theirs")), Some(&owner)).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.is_null());

    let (_, body) = app.query("owner.getPropertyById", Some(json!("prop_theirs")), Some(&admin)).await;
    assert_eq!(body["id"], "prop_theirs");
}

#[tokio::test]
async fn test_update_property() {
    let app = TestApp::new().await;
    let owner = app.login_as("user_owner", "owner").await;
    app.seed_property("prop_mine", Some("user_owner")).await;

    let (status, body) = app.mutate(
        "owner.updateProperty",
        json!({ "id": "prop_mine", "price": "1650.00", "description": "Freshly painted" }),
        Some(&owner),
    ).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "success": true }));

    let (_, body) = app.query("owner.getPropertyById", Some(json!("prop_mine")), Some(&owner)).await;
    assert_eq!(body["price"], "1650.00");
    assert_eq!(body["description"], "Freshly painted");
}

#[tokio::test]
async fn test_tenants_empty_without_properties() {
    let app = TestApp::new().await;
    let owner = app.login_as("user_owner", "owner").await;
    app.login_as("user_tenant", "tenant").await;
    app.seed_tenant("tenant_1", "user_tenant", None).await;

    let (status, body) = app.query("owner.getTenants", None, Some(&owner)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_tenants_and_billing_lists_are_not_narrowed() {
    let app = TestApp::new().await;
    let owner = app.login_as("user_owner", "owner").await;
    app.login_as("user_other", "owner").await;
    app.login_as("user_tenant", "tenant").await;
    app.seed_property("prop_mine", Some("user_owner")).await;
    app.seed_property("prop_theirs", Some("user_other")).await;
    app.seed_unit("unit_theirs", "prop_theirs").await;
    app.seed_tenant("tenant_1", "user_tenant", Some("unit_theirs")).await;
    app.seed_payment("pay_1", "user_tenant", Some("tenant_1"), "800.00", "completed").await;
    app.seed_invoice("inv_1", "tenant_1", "unit_theirs", "800.00").await;
    app.seed_document("doc_1", Some("tenant_1")).await;
    app.seed_maintenance("maint_1", "prop_theirs", Some("tenant_1"), "open").await;

    for procedure in [
        "owner.getTenants",
        "owner.getPayments",
        "owner.getInvoices",
        "owner.getDocuments",
        "owner.getMaintenanceRequests",
    ] {
        let (status, body) = app.query(procedure, None, Some(&owner)).await;
        assert_eq!(status, StatusCode::OK, "{}", procedure);
        assert_eq!(body.as_array().unwrap().len(), 1, "{}", procedure);
    }
}

#[tokio::test]
async fn test_owner_stats() {
    let app = TestApp::new().await;
    let owner = app.login_as("user_owner", "owner").await;
    app.login_as("user_tenant", "tenant").await;
    app.seed_property("prop_1", Some("user_owner")).await;
    app.seed_property("prop_2", Some("user_owner")).await;
    app.seed_property("prop_3", None).await;
    app.seed_tenant("tenant_1", "user_tenant", None).await;
    app.seed_maintenance("maint_1", "prop_1", None, "open").await;
    app.seed_maintenance("maint_2", "prop_3", None, "completed").await;
    app.seed_payment("pay_1", "user_tenant", Some("tenant_1"), "100.50", "completed").await;
    app.seed_payment("pay_2", "user_tenant", Some("tenant_1"), "49.50", "pending").await;

    let (status, body) = app.query("owner.getStats", None, Some(&owner)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["totalProperties"], 2);
    assert_eq!(body["totalTenants"], 1);
    assert_eq!(body["pendingMaintenance"], 2);
    assert_eq!(body["totalRevenue"], "150.00");
}
