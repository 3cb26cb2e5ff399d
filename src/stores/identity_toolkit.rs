use reqwest::StatusCode;
use serde_json::{json, Value};

use super::{IdentityProvider, IdentityProviderError};
use crate::config::FirebaseConfig;

/// Identity provider backed by the Identity Toolkit `accounts:delete`
/// endpoint (the service behind Firebase Authentication). The endpoint
/// reports a missing account as HTTP 400 with a `USER_NOT_FOUND` error
/// message, which this adapter maps to `IdentityProviderError::UserNotFound`.
pub struct IdentityToolkitProvider {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
    bearer_token: Option<String>,
}

impl IdentityToolkitProvider {
    pub fn new(client: reqwest::Client, firebase: &FirebaseConfig) -> Self {
        Self {
            client,
            base_url: firebase.identity_base_url.trim_end_matches('/').to_string(),
            api_key: firebase.api_key.clone(),
            bearer_token: firebase.service_token.clone(),
        }
    }

    fn delete_url(&self) -> String {
        match &self.api_key {
            Some(key) => format!("{}/v1/accounts:delete?key={}", self.base_url, key),
            None => format!("{}/v1/accounts:delete", self.base_url),
        }
    }

    /// Pulls `error.message` out of an Identity Toolkit error body, falling
    /// back to the raw body when it isn't the documented JSON shape.
    fn error_message(body: &str) -> String {
        serde_json::from_str::<Value>(body)
            .ok()
            .and_then(|v| {
                v.get("error")
                    .and_then(|e| e.get("message"))
                    .and_then(Value::as_str)
                    .map(str::to_string)
            })
            .unwrap_or_else(|| body.trim().to_string())
    }

    fn is_user_not_found(status: StatusCode, message: &str) -> bool {
        status == StatusCode::BAD_REQUEST && message.contains("USER_NOT_FOUND")
    }
}

#[async_trait::async_trait]
impl IdentityProvider for IdentityToolkitProvider {
    async fn delete_user(&self, uid: &str) -> Result<(), IdentityProviderError> {
        let mut request = self
            .client
            .post(self.delete_url())
            .json(&json!({ "localId": uid }));
        if let Some(token) = &self.bearer_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let message = Self::error_message(&response.text().await.unwrap_or_default());
        if Self::is_user_not_found(status, &message) {
            return Err(IdentityProviderError::UserNotFound);
        }

        Err(IdentityProviderError::Backend {
            status: status.as_u16(),
            message,
        })
    }
}
