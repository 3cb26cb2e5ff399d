// External collaborator seams
//
// The handler only ever needs two capabilities from the outside world: an
// existence check against the admin role collection, and a delete-by-id call
// against the identity provider. Both are modeled as traits so the check
// sequence in services::AdminAccountService is testable without a live
// backend.

pub mod firestore;
pub mod identity_toolkit;

pub use firestore::FirestoreRoleStore;
pub use identity_toolkit::IdentityToolkitProvider;

use async_trait::async_trait;

/// Keyed store recording which identities hold the admin role. The existence
/// of a record at `uid` is the entire authorization signal; record contents
/// are never inspected.
#[async_trait]
pub trait RoleStore: Send + Sync {
    async fn is_admin(&self, uid: &str) -> Result<bool, RoleStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RoleStoreError {
    #[error("role store request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("role store returned unexpected status {status}: {message}")]
    Backend { status: u16, message: String },
}

/// Service of record for authentication accounts, supporting deletion by
/// identifier. Implementations must report a missing target as
/// `UserNotFound` so the caller can treat the deletion as idempotent.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn delete_user(&self, uid: &str) -> Result<(), IdentityProviderError>;
}

#[derive(Debug, thiserror::Error)]
pub enum IdentityProviderError {
    #[error("user not found")]
    UserNotFound,
    #[error("identity provider request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("identity provider rejected the request ({status}): {message}")]
    Backend { status: u16, message: String },
}
