use axum::{extract::Request, http::HeaderMap, middleware::Next, response::Response};

use crate::auth::{verify_token, Claims};

/// Authenticated caller identity extracted from a verified bearer token
#[derive(Clone, Debug)]
pub struct AuthUser {
    pub uid: String,
    pub email: Option<String>,
}

impl From<Claims> for AuthUser {
    fn from(claims: Claims) -> Self {
        Self {
            uid: claims.sub,
            email: claims.email,
        }
    }
}

/// Identity-attaching middleware. Verifies the bearer ID token when one is
/// present and injects `AuthUser` into request extensions.
///
/// The request is ALWAYS forwarded: handlers answer `unauthenticated`
/// themselves, which keeps the check order of the deletion operation
/// observable (a request that is both unauthenticated and malformed must
/// fail on authentication). A token that fails verification counts as no
/// identity at all.
pub async fn attach_identity(mut request: Request, next: Next) -> Response {
    if let Some(token) = bearer_token(request.headers()) {
        match verify_token(&token) {
            Ok(claims) => {
                request.extensions_mut().insert(AuthUser::from(claims));
            }
            Err(e) => {
                tracing::debug!("discarding unverifiable bearer token: {}", e);
            }
        }
    }

    next.run(request).await
}

/// Extract the bearer token from the Authorization header
fn bearer_token(headers: &HeaderMap) -> Option<String> {
    let auth_header = headers
        .get("authorization")
        .or_else(|| headers.get("Authorization"))?;

    let auth_str = auth_header.to_str().ok()?;
    let token = auth_str.strip_prefix("Bearer ")?;

    if token.trim().is_empty() {
        None
    } else {
        Some(token.to_string())
    }
}
