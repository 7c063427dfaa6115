use axum::{extract::State, http::StatusCode};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::user::LoginRequest;
use crate::presentation::AppState;
use crate::presentation::app_error::AppResult;
use crate::presentation::extract::AppJson;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub(crate) struct LoginDto {
    #[validate(email)]
    pub(crate) email: String,
    #[validate(length(min = 1))]
    pub(crate) password: String,
}

#[utoipa::path(
    post,
    path = "/login",
    tag = "auth",
    request_body = LoginDto,
    responses(
        (status = 200, description = "Login successful, body is the raw token string", body = String),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Invalid credentials"),
        (status = 422, description = "Unreadable body"),
        (status = 500, description = "Internal error")
    )
)]
pub(crate) async fn login(
    State(state): State<AppState>,
    AppJson(dto): AppJson<LoginDto>,
) -> AppResult<(StatusCode, String)> {
    dto.validate()?;

    let token = state
        .auth_service
        .login(LoginRequest {
            email: dto.email,
            password: dto.password,
        })
        .await?;

    // the token is the whole body, not wrapped in JSON
    Ok((StatusCode::OK, token))
}
