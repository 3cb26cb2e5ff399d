use std::sync::{Arc, Mutex};

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use admin_api_rust::app::{app, AppState};
use admin_api_rust::auth::{issue_token, Claims};
use admin_api_rust::services::AdminAccountService;
use admin_api_rust::stores::{IdentityProvider, IdentityProviderError, RoleStore, RoleStoreError};

/// Role store with a fixed admin roster
pub struct StaticRoleStore {
    admins: Vec<String>,
}

#[async_trait::async_trait]
impl RoleStore for StaticRoleStore {
    async fn is_admin(&self, uid: &str) -> Result<bool, RoleStoreError> {
        Ok(self.admins.iter().any(|admin| admin == uid))
    }
}

#[derive(Clone, Copy)]
pub enum ProviderBehavior {
    Succeed,
    UserMissing,
    Fail,
}

/// Identity provider that records every delete call and answers per the
/// scripted behavior
pub struct ScriptedIdentityProvider {
    behavior: ProviderBehavior,
    calls: Arc<Mutex<Vec<String>>>,
}

#[async_trait::async_trait]
impl IdentityProvider for ScriptedIdentityProvider {
    async fn delete_user(&self, uid: &str) -> Result<(), IdentityProviderError> {
        self.calls.lock().unwrap().push(uid.to_string());
        match self.behavior {
            ProviderBehavior::Succeed => Ok(()),
            ProviderBehavior::UserMissing => Err(IdentityProviderError::UserNotFound),
            ProviderBehavior::Fail => Err(IdentityProviderError::Backend {
                status: 500,
                message: "backend unavailable".to_string(),
            }),
        }
    }
}

/// Assemble the full router with mock collaborators. Returns the app plus a
/// handle to the provider's call log.
pub fn test_app(
    admins: &[&str],
    behavior: ProviderBehavior,
) -> (Router, Arc<Mutex<Vec<String>>>) {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let role_store = Arc::new(StaticRoleStore {
        admins: admins.iter().map(|s| s.to_string()).collect(),
    });
    let provider = Arc::new(ScriptedIdentityProvider {
        behavior,
        calls: calls.clone(),
    });

    let state = AppState {
        admin_service: Arc::new(AdminAccountService::new(role_store, provider)),
    };
    (app(state), calls)
}

/// Bearer header value for a caller with the given uid
pub fn bearer_for(uid: &str) -> String {
    let token = issue_token(&Claims::new(uid, None)).expect("failed to issue test token");
    format!("Bearer {}", token)
}

/// Drive the callable endpoint once and return (status, parsed JSON body)
pub async fn call_delete(
    app: Router,
    bearer: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder()
        .method("POST")
        .uri("/api/admin/delete-account");
    if let Some(bearer) = bearer {
        builder = builder.header(header::AUTHORIZATION, bearer);
    }

    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = serde_json::from_slice(&bytes).unwrap();
    (status, value)
}
