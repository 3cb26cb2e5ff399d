use axum::{extract::State, response::Json, Extension};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::app::AppState;
use crate::error::ApiError;
use crate::middleware::AuthUser;

#[derive(Debug, Default, Deserialize)]
pub struct DeleteAccountRequest {
    /// Identity-provider uid of the admin account to delete
    pub uid: Option<String>,
}

/// POST /api/admin/delete-account - Delete an admin's authentication record
///
/// Called by the operator console after the admin's profile document has
/// already been removed from the document store. Requires an authenticated
/// admin caller; deleting your own account is refused. Deleting an account
/// that is already gone still succeeds, with a message distinguishing the
/// case.
///
/// Expected Input:
/// ```json
/// {
///   "uid": "string"    // Required: identity-provider uid of the target
/// }
/// ```
///
/// Expected Output (Success):
/// ```json
/// {
///   "success": true,
///   "message": "Admin account deleted successfully from the identity provider"
/// }
/// ```
///
/// Expected Output (Failure):
/// ```json
/// {
///   "error": true,
///   "code": "unauthenticated | permission-denied | invalid-argument | internal",
///   "message": "string"
/// }
/// ```
pub async fn delete_account(
    State(state): State<AppState>,
    auth: Option<Extension<AuthUser>>,
    payload: Option<Json<DeleteAccountRequest>>,
) -> Result<Json<Value>, ApiError> {
    // A missing or unreadable body is still a request; the service decides
    // which check fails first
    let request = payload.map(|Json(r)| r).unwrap_or_default();
    let caller_uid = auth.as_ref().map(|Extension(user)| user.uid.as_str());

    let outcome = state
        .admin_service
        .delete_admin_account(caller_uid, request.uid.as_deref())
        .await?;

    Ok(Json(json!({
        "success": true,
        "message": outcome.message()
    })))
}
