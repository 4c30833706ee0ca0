use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;

use crate::error::ApiError;

/// Bearer authentication.
///
/// The token is treated as an opaque subject identifier and every record
/// is scoped to it. On success, `AuthUser` is inserted into the request
/// extensions for handlers and copied onto the response for the audit log.
pub async fn require_auth(mut req: Request, next: Next) -> Result<Response, ApiError> {
    let sub = {
        let auth_header = req
            .headers()
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| ApiError::Unauthorized("missing bearer token".to_string()))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .map(str::trim)
            .unwrap_or_default();

        if token.is_empty() {
            return Err(ApiError::Unauthorized("missing bearer token".to_string()));
        }

        token.to_string()
    };

    let user = AuthUser { sub };
    req.extensions_mut().insert(user.clone());

    let mut response = next.run(req).await;
    response.extensions_mut().insert(user);
    Ok(response)
}

/// Authenticated user.
#[derive(Clone, Debug)]
pub struct AuthUser {
    pub sub: String,
}
