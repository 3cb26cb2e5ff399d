use std::sync::Arc;

use crate::stores::{IdentityProvider, IdentityProviderError, RoleStore};

/// Tagged failure for the admin deletion operation. Callers match on the
/// variant; the Display text is the operator-facing message.
#[derive(Debug, thiserror::Error)]
pub enum AdminDeleteError {
    #[error("User must be authenticated to delete admins")]
    Unauthenticated,
    #[error("Only admins can delete other admins")]
    PermissionDenied,
    #[error("{0}")]
    InvalidArgument(String),
    #[error("{0}")]
    Internal(String),
}

/// How the delegated deletion concluded. `AlreadyAbsent` is still a success:
/// the target may have been deleted out from under us, and a repeat call
/// must not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeletionOutcome {
    Deleted,
    AlreadyAbsent,
}

impl DeletionOutcome {
    pub fn message(&self) -> &'static str {
        match self {
            DeletionOutcome::Deleted => {
                "Admin account deleted successfully from the identity provider"
            }
            DeletionOutcome::AlreadyAbsent => {
                "Admin account not found in the identity provider (may have been deleted already)"
            }
        }
    }
}

/// Deletes an administrator's authentication record after the admin's
/// profile document has already been removed from the document store.
///
/// The checks run in a fixed order, cheapest and most fundamental first, so
/// unauthenticated or unauthorized callers learn nothing about the payload:
/// authentication, then authorization, then input validation, then the
/// self-deletion guard, then the single delegated deletion call.
pub struct AdminAccountService {
    role_store: Arc<dyn RoleStore>,
    identity_provider: Arc<dyn IdentityProvider>,
}

impl AdminAccountService {
    pub fn new(
        role_store: Arc<dyn RoleStore>,
        identity_provider: Arc<dyn IdentityProvider>,
    ) -> Self {
        Self {
            role_store,
            identity_provider,
        }
    }

    /// Execute the deletion request on behalf of `caller_uid`.
    ///
    /// Side effects: one role lookup, at most one deletion call. No retries;
    /// a transient provider failure surfaces immediately as `Internal`.
    #[tracing::instrument(name = "AdminAccountService::delete_admin_account", skip(self))]
    pub async fn delete_admin_account(
        &self,
        caller_uid: Option<&str>,
        target_uid: Option<&str>,
    ) -> Result<DeletionOutcome, AdminDeleteError> {
        // Verify the caller is authenticated
        let caller = caller_uid.ok_or(AdminDeleteError::Unauthenticated)?;

        // Verify the caller is an admin: existence of the role record is the
        // entire check
        let caller_is_admin = self.role_store.is_admin(caller).await.map_err(|e| {
            tracing::error!("admin role lookup failed for {}: {}", caller, e);
            AdminDeleteError::Internal(format!("Admin role lookup failed: {}", e))
        })?;
        if !caller_is_admin {
            tracing::warn!("non-admin {} attempted admin deletion", caller);
            return Err(AdminDeleteError::PermissionDenied);
        }

        let target = match target_uid {
            Some(uid) if !uid.is_empty() => uid,
            _ => return Err(AdminDeleteError::InvalidArgument("UID is required".to_string())),
        };

        // Safety rail, not a security boundary
        if target == caller {
            return Err(AdminDeleteError::InvalidArgument(
                "Cannot delete your own account".to_string(),
            ));
        }

        match self.identity_provider.delete_user(target).await {
            Ok(()) => {
                tracing::info!("admin account {} deleted by {}", target, caller);
                Ok(DeletionOutcome::Deleted)
            }
            // Already gone is fine - the client may retry after a partial failure
            Err(IdentityProviderError::UserNotFound) => {
                tracing::info!("admin account {} was already absent", target);
                Ok(DeletionOutcome::AlreadyAbsent)
            }
            Err(e) => {
                tracing::error!("error deleting admin account {}: {}", target, e);
                Err(AdminDeleteError::Internal(format!(
                    "Error deleting admin account: {}",
                    e
                )))
            }
        }
    }
}
