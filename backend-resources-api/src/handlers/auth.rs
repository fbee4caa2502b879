use crate::{error::AppError, state::AppState};
use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use backend_resources_domain::{application::ports::AuthorizationContext, domain::errors::AuthError};
use tracing::debug;

/// Verify the bearer token and attach the caller's [`AuthorizationContext`]
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = bearer_token(&request)?.to_string();

    let info = state.introspector.introspect(&token).await?;
    let context = AuthorizationContext::from_token_info(info)?;

    debug!(
        "Authenticated {} with roles {:?}",
        context.username.as_deref().unwrap_or("<unknown>"),
        context.roles
    );

    request.extensions_mut().insert(context);
    Ok(next.run(request).await)
}

fn bearer_token(request: &Request) -> Result<&str, AuthError> {
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or(AuthError::MissingToken)?;

    // The auth scheme is case-insensitive
    let token = header
        .split_once(' ')
        .filter(|(scheme, _)| scheme.eq_ignore_ascii_case("bearer"))
        .map(|(_, token)| token.trim())
        .filter(|token| !token.is_empty());

    token.ok_or_else(|| AuthError::InvalidToken {
        reason: "expected a bearer token".to_string(),
    })
}
