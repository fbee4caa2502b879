use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use backend_resources_domain::domain::errors::{AuthError, ProviderOperationError};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Provider(#[from] ProviderOperationError),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Provider(e) => e.status(),
            AppError::Auth(e) => match e {
                AuthError::MissingToken | AuthError::InvalidToken { .. } => {
                    StatusCode::UNAUTHORIZED
                }
                AuthError::InsufficientRole { .. } => StatusCode::FORBIDDEN,
                AuthError::IntrospectionFailed { .. } => StatusCode::BAD_GATEWAY,
            },
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error_message = match &self {
            AppError::Provider(e) => e.message().to_string(),
            other => other.to_string(),
        };

        if status.is_server_error() {
            tracing::error!(status = %status, "{}", error_message);
        }

        let body = Json(json!({
            "error": error_message,
            "status": status.as_u16(),
        }));

        (status, body).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_errors_keep_their_status() {
        let err = AppError::from(ProviderOperationError::not_found("User not found"));
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn auth_errors_map_to_401_and_403() {
        assert_eq!(AppError::from(AuthError::MissingToken).status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            AppError::from(AuthError::InsufficientRole {
                required: vec!["ADMIN".to_string()]
            })
            .status(),
            StatusCode::FORBIDDEN
        );
    }
}
