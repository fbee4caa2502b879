use crate::{
    error::{AppError, AppResult},
    state::AppState,
};
use axum::{
    extract::{rejection::JsonRejection, rejection::PathRejection, Path, State},
    http::StatusCode,
    Extension, Json,
};
use backend_resources_domain::{
    application::ports::{roles, AuthorizationContext},
    domain::entities::{UserCreateRequest, UserView},
};
use uuid::Uuid;

pub async fn create_user(
    State(state): State<AppState>,
    Extension(context): Extension<AuthorizationContext>,
    request: Result<Json<UserCreateRequest>, JsonRejection>,
) -> AppResult<StatusCode> {
    context.require_any_role(&[roles::ADMIN])?;
    let Json(request) = request.map_err(|e| AppError::BadRequest(e.body_text()))?;

    state.user_service.create_user(&request).await?;
    Ok(StatusCode::OK)
}

pub async fn get_user(
    State(state): State<AppState>,
    Extension(context): Extension<AuthorizationContext>,
    user_id: Result<Path<Uuid>, PathRejection>,
) -> AppResult<Json<UserView>> {
    context.require_any_role(&[roles::ADMIN, roles::MODERATOR])?;
    let Path(user_id) = user_id.map_err(|e| AppError::BadRequest(e.body_text()))?;

    let user = state.user_service.get_user_by_id(user_id).await?;
    Ok(Json(user))
}
