use reqwest::StatusCode;

use super::{RoleStore, RoleStoreError};
use crate::config::FirebaseConfig;

/// Role store backed by a Firestore collection, reached over the Firestore
/// REST surface. A document at `{collection}/{uid}` marks that identity as
/// an admin; the store performs a single GET and maps the status code.
pub struct FirestoreRoleStore {
    client: reqwest::Client,
    base_url: String,
    project_id: String,
    collection: String,
    bearer_token: Option<String>,
}

impl FirestoreRoleStore {
    pub fn new(client: reqwest::Client, firebase: &FirebaseConfig) -> Self {
        Self {
            client,
            base_url: firebase.firestore_base_url.trim_end_matches('/').to_string(),
            project_id: firebase.project_id.clone(),
            collection: firebase.admin_collection.clone(),
            bearer_token: firebase.service_token.clone(),
        }
    }

    fn document_url(&self, uid: &str) -> String {
        format!(
            "{}/projects/{}/databases/(default)/documents/{}/{}",
            self.base_url, self.project_id, self.collection, uid
        )
    }

    /// 200 means the role document exists, 404 means it does not; anything
    /// else is a backend fault the caller has to surface.
    fn document_exists(status: StatusCode) -> Option<bool> {
        match status {
            StatusCode::OK => Some(true),
            StatusCode::NOT_FOUND => Some(false),
            _ => None,
        }
    }
}

#[async_trait::async_trait]
impl RoleStore for FirestoreRoleStore {
    async fn is_admin(&self, uid: &str) -> Result<bool, RoleStoreError> {
        let mut request = self.client.get(self.document_url(uid));
        if let Some(token) = &self.bearer_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();

        match Self::document_exists(status) {
            Some(exists) => Ok(exists),
            None => {
                let message = response.text().await.unwrap_or_default();
                Err(RoleStoreError::Backend {
                    status: status.as_u16(),
                    message,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    fn store() -> FirestoreRoleStore {
        let mut firebase = AppConfig::from_env().firebase;
        firebase.firestore_base_url = "https://firestore.googleapis.com/v1/".to_string();
        firebase.project_id = "demo-admin-api".to_string();
        firebase.admin_collection = "admin".to_string();
        FirestoreRoleStore::new(reqwest::Client::new(), &firebase)
    }

    #[test]
    fn document_url_targets_admin_collection() {
        let url = store().document_url("abc123");
        assert_eq!(
            url,
            "https://firestore.googleapis.com/v1/projects/demo-admin-api/databases/(default)/documents/admin/abc123"
        );
    }

    #[test]
    fn status_mapping_distinguishes_absence_from_faults() {
        assert_eq!(FirestoreRoleStore::document_exists(StatusCode::OK), Some(true));
        assert_eq!(
            FirestoreRoleStore::document_exists(StatusCode::NOT_FOUND),
            Some(false)
        );
        assert_eq!(
            FirestoreRoleStore::document_exists(StatusCode::FORBIDDEN),
            None
        );
        assert_eq!(
            FirestoreRoleStore::document_exists(StatusCode::INTERNAL_SERVER_ERROR),
            None
        );
    }
}
