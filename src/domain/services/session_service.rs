use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use tracing::{debug, error};

use crate::domain::models::session::SessionClaims;
use crate::error::AppError;

/// Signs and verifies the HS256 session cookie issued at sign-in.
pub struct SessionService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl SessionService {
    pub fn new(secret: &str) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation: Validation::new(Algorithm::HS256),
        }
    }

    pub fn issue(&self, claims: &SessionClaims) -> Result<String, AppError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key).map_err(|e| {
            error!("Session token encoding failed: {}", e);
            AppError::Internal
        })
    }

    /// `None` for expired, tampered or malformed tokens.
    pub fn verify(&self, token: &str) -> Option<SessionClaims> {
        match decode::<SessionClaims>(token, &self.decoding_key, &self.validation) {
            Ok(data) => Some(data.claims),
            Err(e) => {
                debug!("Session token rejected: {}", e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn claims(sub: &str, exp: i64) -> SessionClaims {
        SessionClaims {
            sub: sub.to_string(),
            name: Some("Jane".to_string()),
            email: None,
            login_method: Some("oauth".to_string()),
            exp: exp as usize,
        }
    }

    #[test]
    fn test_issued_token_verifies() {
        let service = SessionService::new("test-secret");
        let exp = (Utc::now() + Duration::hours(1)).timestamp();
        let token = service.issue(&claims("user_1", exp)).unwrap();

        let verified = service.verify(&token).unwrap();
        assert_eq!(verified.sub, "user_1");
        assert_eq!(verified.name.as_deref(), Some("Jane"));
    }

    #[test]
    fn test_foreign_secret_is_rejected() {
        let exp = (Utc::now() + Duration::hours(1)).timestamp();
        let token = SessionService::new("other-secret").issue(&claims("user_1", exp)).unwrap();
        assert!(SessionService::new("test-secret").verify(&token).is_none());
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let service = SessionService::new("test-secret");
        let exp = (Utc::now() - Duration::hours(2)).timestamp();
        let token = service.issue(&claims("user_1", exp)).unwrap();
        assert!(service.verify(&token).is_none());
    }

    #[test]
    fn test_garbage_is_rejected() {
        assert!(SessionService::new("test-secret").verify("not-a-token").is_none());
    }
}
