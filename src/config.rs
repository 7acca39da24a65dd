use std::env;

#[derive(Clone)]
pub struct Config {
    /// Absent means the store is unavailable: reads degrade, writes fail.
    pub database_url: Option<String>,
    pub port: u16,
    pub jwt_secret: String,
    /// Users whose id matches this are provisioned as admins on first sign-in.
    pub owner_open_id: Option<String>,
    pub notification_service_url: Option<String>,
    pub notification_service_token: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            database_url: non_empty_var("DATABASE_URL"),
            port: env::var("PORT").unwrap_or_else(|_| "3000".to_string()).parse().expect("PORT must be a number"),
            jwt_secret: env::var("JWT_SECRET").expect("JWT_SECRET must be set (session cookie signing key)"),
            owner_open_id: non_empty_var("OWNER_OPEN_ID"),
            notification_service_url: non_empty_var("NOTIFICATION_SERVICE_URL"),
            notification_service_token: non_empty_var("NOTIFICATION_SERVICE_TOKEN"),
        }
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}
