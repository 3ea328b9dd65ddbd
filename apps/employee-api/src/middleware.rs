use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use employee_domain::Role;
use tracing::warn;

use crate::error::ApiResult;

pub const ROLE_HEADER: &str = "Role";

/// Resolves the `Role` header and exposes it to handlers as an extension.
pub async fn require_role_header(mut request: Request, next: Next) -> ApiResult<Response> {
    // Non-ASCII bytes must still reach the parser as a present value.
    let raw = request
        .headers()
        .get(ROLE_HEADER)
        .map(|value| String::from_utf8_lossy(value.as_bytes()).into_owned());

    let role = Role::parse(raw.as_deref()).inspect_err(|error| {
        warn!(
            method = %request.method(),
            path = request.uri().path(),
            error = %error,
            "rejected role header"
        );
    })?;

    request.extensions_mut().insert(role);
    Ok(next.run(request).await)
}
