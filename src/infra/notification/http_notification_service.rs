use crate::domain::ports::NotificationService;
use crate::error::AppError;
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use tracing::{error, warn};

pub const TITLE_MAX_LENGTH: usize = 1200;
pub const CONTENT_MAX_LENGTH: usize = 20000;

/// Forwards owner notifications to the external notification service.
pub struct HttpNotificationService {
    client: Client,
    api_url: Option<String>,
    api_key: Option<String>,
}

impl HttpNotificationService {
    pub fn new(api_url: Option<String>, api_key: Option<String>) -> Self {
        Self {
            client: Client::new(),
            api_url,
            api_key,
        }
    }
}

#[derive(Serialize)]
struct NotificationPayload<'a> {
    title: &'a str,
    content: &'a str,
}

fn check_payload(title: &str, content: &str) -> Result<(), AppError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(AppError::Validation("Notification title is required.".to_string()));
    }
    if title.chars().count() > TITLE_MAX_LENGTH {
        return Err(AppError::Validation(format!(
            "Notification title must be at most {} characters.",
            TITLE_MAX_LENGTH
        )));
    }
    if content.trim().is_empty() {
        return Err(AppError::Validation("Notification content is required.".to_string()));
    }
    if content.chars().count() > CONTENT_MAX_LENGTH {
        return Err(AppError::Validation(format!(
            "Notification content must be at most {} characters.",
            CONTENT_MAX_LENGTH
        )));
    }
    Ok(())
}

#[async_trait]
impl NotificationService for HttpNotificationService {
    async fn notify_owner(&self, title: &str, content: &str) -> Result<(), AppError> {
        check_payload(title, content)?;

        let (Some(api_url), Some(api_key)) = (&self.api_url, &self.api_key) else {
            warn!("[Notification] Notification service is not configured");
            return Err(AppError::InternalWithMsg("Notification service is not configured".to_string()));
        };

        let payload = NotificationPayload {
            title: title.trim(),
            content: content.trim(),
        };

        let res = self.client.post(api_url)
            .header("Authorization", format!("Bearer {}", api_key))
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                let msg = format!("[Notification] Connection error: {}", e);
                error!("{}", msg);
                AppError::InternalWithMsg(msg)
            })?;

        if !res.status().is_success() {
            let status = res.status();
            let text = res.text().await.unwrap_or_default();
            let msg = format!("[Notification] Failed to notify owner. Status: {}, Body: {}", status, text);
            error!("{}", msg);
            return Err(AppError::InternalWithMsg(msg));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limits_are_inclusive() {
        let title = "t".repeat(TITLE_MAX_LENGTH);
        let content = "c".repeat(CONTENT_MAX_LENGTH);
        assert!(check_payload(&title, &content).is_ok());
    }

    #[test]
    fn test_long_title_is_rejected() {
        let title = "t".repeat(TITLE_MAX_LENGTH + 1);
        assert!(matches!(check_payload(&title, "body"), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_long_content_is_rejected() {
        let content = "c".repeat(CONTENT_MAX_LENGTH + 1);
        assert!(matches!(check_payload("title", &content), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_blank_title_is_rejected() {
        assert!(check_payload("   ", "body").is_err());
    }

    #[tokio::test]
    async fn test_unconfigured_service_fails() {
        let service = HttpNotificationService::new(None, None);
        let err = service.notify_owner("title", "body").await.unwrap_err();
        assert!(matches!(err, AppError::InternalWithMsg(_)));
    }
}
