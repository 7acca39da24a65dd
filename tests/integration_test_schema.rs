mod common;

use chrono::{Duration, Utc};
use common::TestApp;
use estate_portal::domain::models::{
    billing::Subscription, notification::Notification, unit::Unit,
};

#[tokio::test]
async fn test_schema_only_tables_decode_into_rows() {
    let app = TestApp::new().await;
    app.login_as("user_tenant", "tenant").await;
    app.seed_property("prop_1", None).await;
    app.seed_unit("unit_1", "prop_1").await;
    app.seed_tenant("tenant_1", "user_tenant", Some("unit_1")).await;

    let unit: Unit = sqlx::query_as("SELECT * FROM units WHERE id = 'unit_1'")
        .fetch_one(app.pool())
        .await
        .unwrap();
    assert_eq!(unit.property_id, "prop_1");
    assert_eq!(unit.rent_amount, "1500.00");

    sqlx::query(
        "INSERT INTO subscriptions (id, tenant_id, unit_id, amount, frequency, status, start_date, created_at, updated_at) \
         VALUES ('sub_1', 'tenant_1', 'unit_1', '1500.00', 'monthly', 'active', ?, ?, ?)"
    )
        .bind(Utc::now())
        .bind(Utc::now())
        .bind(Utc::now())
        .execute(app.pool())
        .await
        .unwrap();
    let subscription: Subscription = sqlx::query_as("SELECT * FROM subscriptions WHERE id = 'sub_1'")
        .fetch_one(app.pool())
        .await
        .unwrap();
    assert_eq!(subscription.frequency, "monthly");
    assert!(subscription.end_date.is_none());

    sqlx::query(
        "INSERT INTO notifications (id, user_id, notification_type, title, created_at) \
         VALUES ('notif_1', 'user_tenant', 'payment_due', 'Rent due', ?)"
    )
        .bind(Utc::now())
        .execute(app.pool())
        .await
        .unwrap();
    let notification: Notification = sqlx::query_as("SELECT * FROM notifications WHERE id = 'notif_1'")
        .fetch_one(app.pool())
        .await
        .unwrap();
    assert!(!notification.is_read);
    let json = serde_json::to_value(&notification).unwrap();
    assert_eq!(json["type"], "payment_due");
    assert_eq!(json["read"], false);
}

#[tokio::test]
async fn test_enum_domains_are_enforced() {
    let app = TestApp::new().await;

    let result = sqlx::query("INSERT INTO users (id, role, created_at, last_signed_in) VALUES ('u1', 'landlord', ?, ?)")
        .bind(Utc::now())
        .bind(Utc::now())
        .execute(app.pool())
        .await;
    assert!(result.is_err());

    let result = sqlx::query(
        "INSERT INTO maintenance_requests (id, property_id, title, priority, status, created_at, updated_at) \
         VALUES ('m1', 'p1', 'Leak', 'medium', 'pending', ?, ?)"
    )
        .bind(Utc::now())
        .bind(Utc::now())
        .execute(app.pool())
        .await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_lease_end_must_follow_start() {
    let app = TestApp::new().await;
    app.login_as("user_tenant", "tenant").await;

    let start = Utc::now();
    let result = sqlx::query(
        "INSERT INTO tenants (id, user_id, lease_start_date, lease_end_date, status, created_at, updated_at) \
         VALUES ('t1', 'user_tenant', ?, ?, 'active', ?, ?)"
    )
        .bind(start)
        .bind(start - Duration::days(1))
        .bind(Utc::now())
        .bind(Utc::now())
        .execute(app.pool())
        .await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_negative_property_values_are_rejected() {
    let app = TestApp::new().await;

    let result = sqlx::query(
        "INSERT INTO properties (id, name, address, city, state, zip_code, price, property_type, beds, baths, sqft, created_at, updated_at) \
         VALUES ('p1', 'n', 'a', 'c', 's', 'z', '100', 'Rent', -1, 1, 1, ?, ?)"
    )
        .bind(Utc::now())
        .bind(Utc::now())
        .execute(app.pool())
        .await;
    assert!(result.is_err());
}
