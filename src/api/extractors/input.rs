use axum::{
    body::Bytes,
    extract::{FromRequest, Query, Request},
    http::Method,
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::HashMap;
use validator::Validate;

use crate::error::AppError;

/// Procedure input: `?input=<json>` on queries, the JSON body on mutations.
/// Absent input reads as `null`. The value is deserialized and validated
/// before the handler runs.
pub struct RpcInput<T>(pub T);

impl<S, T> FromRequest<S> for RpcInput<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let value = if req.method() == Method::GET {
            let Query(params) = Query::<HashMap<String, String>>::try_from_uri(req.uri())
                .map_err(|e| AppError::Validation(format!("Invalid query string: {}", e)))?;
            match params.get("input") {
                Some(raw) => serde_json::from_str::<Value>(raw)
                    .map_err(|e| AppError::Validation(format!("Input is not valid JSON: {}", e)))?,
                None => Value::Null,
            }
        } else {
            let body = Bytes::from_request(req, state)
                .await
                .map_err(|e| AppError::Validation(format!("Unreadable request body: {}", e)))?;
            if body.iter().all(u8::is_ascii_whitespace) {
                Value::Null
            } else {
                serde_json::from_slice::<Value>(&body)
                    .map_err(|e| AppError::Validation(format!("Input is not valid JSON: {}", e)))?
            }
        };

        let input: T = serde_json::from_value(value)
            .map_err(|e| AppError::Validation(format!("Invalid input: {}", e)))?;
        input.validate().map_err(AppError::InvalidInput)?;

        Ok(RpcInput(input))
    }
}
