use estate_portal::{
    api::router::create_router,
    config::Config,
    domain::{models::session::SessionClaims, ports::NotificationService},
    error::AppError,
    infra::factory::bootstrap_state_with,
    state::AppState,
};
use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use chrono::{Duration, Utc};
use serde_json::Value;
use sqlx::{sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions}, Pool, Sqlite};
use std::str::FromStr;
use std::sync::{atomic::{AtomicBool, Ordering}, Arc, Mutex};
use tower::ServiceExt;
use uuid::Uuid;

pub const OWNER_OPEN_ID: &str = "owner-open-id";

/// Records every notification and can be switched to fail.
#[derive(Default)]
pub struct MockNotificationService {
    pub sent: Mutex<Vec<(String, String)>>,
    pub fail: AtomicBool,
}

#[allow(dead_code)]
impl MockNotificationService {
    pub fn sent(&self) -> Vec<(String, String)> {
        self.sent.lock().unwrap().clone()
    }

    pub fn fail_next(&self) {
        self.fail.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl NotificationService for MockNotificationService {
    async fn notify_owner(&self, title: &str, content: &str) -> Result<(), AppError> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(AppError::InternalWithMsg("notifier down".to_string()));
        }
        self.sent.lock().unwrap().push((title.to_string(), content.to_string()));
        Ok(())
    }
}

#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub pool: Option<Pool<Sqlite>>,
    pub db_filename: Option<String>,
    pub state: Arc<AppState>,
    pub notifier: Arc<MockNotificationService>,
}

#[allow(dead_code)]
impl TestApp {
    pub async fn new() -> Self {
        let db_filename = format!("test_{}.db", Uuid::new_v4());
        let db_url = format!("sqlite://{}?mode=rwc", db_filename);

        let connection_options = SqliteConnectOptions::from_str(&db_url)
            .unwrap()
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(std::time::Duration::from_secs(5));

        let pool = SqlitePoolOptions::new()
            .connect_with(connection_options)
            .await
            .expect("Failed to connect to test db");

        sqlx::migrate!("./migrations/sqlite")
            .run(&pool)
            .await
            .expect("Failed to migrate test db");

        Self::build(Some(db_url), Some(pool), Some(db_filename))
    }

    /// An app whose store was never configured.
    pub fn without_database() -> Self {
        Self::build(None, None, None)
    }

    fn build(database_url: Option<String>, pool: Option<Pool<Sqlite>>, db_filename: Option<String>) -> Self {
        let config = Config {
            database_url,
            port: 0,
            jwt_secret: "test-secret".to_string(),
            owner_open_id: Some(OWNER_OPEN_ID.to_string()),
            notification_service_url: None,
            notification_service_token: None,
        };

        let notifier = Arc::new(MockNotificationService::default());
        let state = Arc::new(bootstrap_state_with(&config, notifier.clone()));
        let router = create_router(state.clone());

        Self { router, pool, db_filename, state, notifier }
    }

    pub fn pool(&self) -> &Pool<Sqlite> {
        self.pool.as_ref().expect("test app has no database")
    }

    /// Session cookie for `user_id` without touching the users table.
    pub fn session_cookie(&self, user_id: &str) -> String {
        let claims = SessionClaims {
            sub: user_id.to_string(),
            name: Some(format!("User {}", user_id)),
            email: Some(format!("{}@example.com", user_id)),
            login_method: Some("oauth".to_string()),
            exp: (Utc::now() + Duration::hours(1)).timestamp() as usize,
        };
        let token = self.state.session_service.issue(&claims).unwrap();
        format!("app_session_id={}", token)
    }

    /// Inserts a user with `role` and returns a session cookie for them.
    pub async fn login_as(&self, user_id: &str, role: &str) -> String {
        sqlx::query("INSERT INTO users (id, name, role, created_at, last_signed_in) VALUES (?, ?, ?, ?, ?)")
            .bind(user_id)
            .bind(format!("User {}", user_id))
            .bind(role)
            .bind(Utc::now())
            .bind(Utc::now())
            .execute(self.pool())
            .await
            .unwrap();
        self.session_cookie(user_id)
    }

    pub async fn seed_property(&self, id: &str, owner_id: Option<&str>) {
        sqlx::query(
            "INSERT INTO properties (id, name, address, city, state, zip_code, price, property_type, beds, baths, sqft, featured, active, owner_id, created_at, updated_at) \
             VALUES (?, ?, '1 Main St', 'Springfield', 'IL', '62701', '1500.00', 'Rent', 2, 1.5, 900, 0, 1, ?, ?, ?)"
        )
            .bind(id)
            .bind(format!("Property {}", id))
            .bind(owner_id)
            .bind(Utc::now())
            .bind(Utc::now())
            .execute(self.pool())
            .await
            .unwrap();
    }

    pub async fn seed_unit(&self, id: &str, property_id: &str) {
        sqlx::query("INSERT INTO units (id, property_id, unit_number, rent_amount, status, created_at, updated_at) VALUES (?, ?, '1A', '1500.00', 'occupied', ?, ?)")
            .bind(id)
            .bind(property_id)
            .bind(Utc::now())
            .bind(Utc::now())
            .execute(self.pool())
            .await
            .unwrap();
    }

    pub async fn seed_tenant(&self, id: &str, user_id: &str, unit_id: Option<&str>) {
        sqlx::query("INSERT INTO tenants (id, user_id, unit_id, status, created_at, updated_at) VALUES (?, ?, ?, 'active', ?, ?)")
            .bind(id)
            .bind(user_id)
            .bind(unit_id)
            .bind(Utc::now())
            .bind(Utc::now())
            .execute(self.pool())
            .await
            .unwrap();
    }

    pub async fn seed_payment(&self, id: &str, user_id: &str, tenant_id: Option<&str>, amount: &str, status: &str) {
        sqlx::query(
            "INSERT INTO payments (id, user_id, tenant_id, amount, currency, status, payment_method, created_at, updated_at) \
             VALUES (?, ?, ?, ?, 'USD', ?, 'stripe', ?, ?)"
        )
            .bind(id)
            .bind(user_id)
            .bind(tenant_id)
            .bind(amount)
            .bind(status)
            .bind(Utc::now())
            .bind(Utc::now())
            .execute(self.pool())
            .await
            .unwrap();
    }

    pub async fn seed_invoice(&self, id: &str, tenant_id: &str, unit_id: &str, amount: &str) {
        sqlx::query(
            "INSERT INTO invoices (id, tenant_id, unit_id, amount, due_date, status, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?, 'sent', ?, ?)"
        )
            .bind(id)
            .bind(tenant_id)
            .bind(unit_id)
            .bind(amount)
            .bind(Utc::now() + Duration::days(30))
            .bind(Utc::now())
            .bind(Utc::now())
            .execute(self.pool())
            .await
            .unwrap();
    }

    pub async fn seed_document(&self, id: &str, tenant_id: Option<&str>) {
        sqlx::query(
            "INSERT INTO documents (id, name, document_type, url, tenant_id, created_at, updated_at) \
             VALUES (?, 'Lease', 'lease', 'https://files.example.com/lease.pdf', ?, ?, ?)"
        )
            .bind(id)
            .bind(tenant_id)
            .bind(Utc::now())
            .bind(Utc::now())
            .execute(self.pool())
            .await
            .unwrap();
    }

    pub async fn seed_maintenance(&self, id: &str, property_id: &str, tenant_id: Option<&str>, status: &str) {
        sqlx::query(
            "INSERT INTO maintenance_requests (id, property_id, tenant_id, title, priority, status, created_at, updated_at) \
             VALUES (?, ?, ?, 'Broken heater', 'medium', ?, ?, ?)"
        )
            .bind(id)
            .bind(property_id)
            .bind(tenant_id)
            .bind(status)
            .bind(Utc::now())
            .bind(Utc::now())
            .execute(self.pool())
            .await
            .unwrap();
    }

    /// Runs a query procedure. `input` travels as `?input=<json>`.
    pub async fn query(&self, procedure: &str, input: Option<Value>, cookie: Option<&str>) -> (StatusCode, Value) {
        let uri = match input {
            Some(input) => {
                let url = reqwest::Url::parse_with_params(
                    &format!("http://localhost/api/trpc/{}", procedure),
                    &[("input", input.to_string())],
                ).unwrap();
                format!("{}?{}", url.path(), url.query().unwrap_or_default())
            }
            None => format!("/api/trpc/{}", procedure),
        };

        let mut builder = Request::builder().method("GET").uri(uri);
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        self.send(builder.body(Body::empty()).unwrap()).await
    }

    /// Runs a mutation procedure with `input` as the JSON body.
    pub async fn mutate(&self, procedure: &str, input: Value, cookie: Option<&str>) -> (StatusCode, Value) {
        let mut builder = Request::builder()
            .method("POST")
            .uri(format!("/api/trpc/{}", procedure))
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        self.send(builder.body(Body::from(input.to_string())).unwrap()).await
    }

    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes).unwrap() };
        (status, body)
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        if let Some(db_filename) = &self.db_filename {
            let _ = std::fs::remove_file(db_filename);
            let _ = std::fs::remove_file(format!("{}-wal", db_filename));
            let _ = std::fs::remove_file(format!("{}-shm", db_filename));
        }
    }
}
