use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;

use super::auth::AuthUser;

/// Logs every API request as a structured event. The subject is included
/// when the auth layer has run.
pub async fn audit_log(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let uri = req.uri().path().to_string();

    let response = next.run(req).await;

    let status = response.status().as_u16();
    let user = response.extensions().get::<AuthUser>().map(|u| u.sub.clone());
    tracing::info!(
        method = %method,
        path = %uri,
        status = status,
        user = user.as_deref().unwrap_or("-"),
        "api_request"
    );

    response
}
