use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::user::{ChangePasswordRequest, RegisterRequest, UpdateUserRequest, User};
use crate::presentation::AppState;
use crate::presentation::app_error::AppResult;
use crate::presentation::extract::{AppJson, AppPath};
use crate::presentation::middleware::auth::AuthenticatedUser;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub(crate) struct RegisterDto {
    #[validate(length(min = 1, max = 255))]
    pub(crate) name: String,
    #[validate(length(min = 1, max = 64))]
    pub(crate) nick: String,
    #[validate(email)]
    pub(crate) email: String,
    #[validate(length(min = 1))]
    pub(crate) password: String,
}

/// Validated by the domain request type, after the ownership check.
#[derive(Debug, Deserialize, ToSchema)]
pub(crate) struct UpdateUserDto {
    pub(crate) name: String,
    pub(crate) nick: String,
    pub(crate) email: String,
}

/// Validated by the domain request type, after the ownership check.
#[derive(Debug, Deserialize, ToSchema)]
pub(crate) struct ChangePasswordDto {
    pub(crate) current: String,
    pub(crate) new: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub(crate) struct SearchUsersQuery {
    /// Substring matched case-insensitively against name and nick.
    pub(crate) user: Option<String>,
}

/// The password hash never leaves the data layer, so this DTO cannot leak it.
#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct UserDto {
    pub(crate) id: i64,
    pub(crate) name: String,
    pub(crate) nick: String,
    pub(crate) email: String,
    pub(crate) created_at: DateTime<Utc>,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            nick: user.nick,
            email: user.email,
            created_at: user.created_at,
        }
    }
}

#[utoipa::path(
    post,
    path = "/users",
    tag = "users",
    request_body = RegisterDto,
    responses(
        (status = 201, description = "User registered", body = UserDto),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Nick or email already taken"),
        (status = 422, description = "Unreadable body"),
        (status = 500, description = "Internal error")
    )
)]
pub(crate) async fn create_user(
    State(state): State<AppState>,
    AppJson(dto): AppJson<RegisterDto>,
) -> AppResult<(StatusCode, Json<UserDto>)> {
    dto.validate()?;

    let user = state
        .user_service
        .register(RegisterRequest {
            name: dto.name,
            nick: dto.nick,
            email: dto.email,
            password: dto.password,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(UserDto::from(user))))
}

#[utoipa::path(
    get,
    path = "/users",
    tag = "users",
    security(("bearer_auth" = [])),
    params(
        ("user" = Option<String>, Query, description = "Name or nick substring")
    ),
    responses(
        (status = 200, description = "Matching users", body = [UserDto]),
        (status = 401, description = "Unauthorized"),
        (status = 500, description = "Internal error")
    )
)]
pub(crate) async fn search_users(
    State(state): State<AppState>,
    Query(query): Query<SearchUsersQuery>,
) -> AppResult<(StatusCode, Json<Vec<UserDto>>)> {
    let term = query.user.unwrap_or_default();
    let users = state.user_service.search_users(&term).await?;

    Ok((
        StatusCode::OK,
        Json(users.into_iter().map(UserDto::from).collect()),
    ))
}

#[utoipa::path(
    get,
    path = "/users/{userID}",
    tag = "users",
    security(("bearer_auth" = [])),
    params(("userID" = i64, Path, description = "User id")),
    responses(
        (status = 200, description = "User found", body = UserDto),
        (status = 400, description = "Malformed id"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "User not found"),
        (status = 500, description = "Internal error")
    )
)]
pub(crate) async fn show_user(
    State(state): State<AppState>,
    AppPath(user_id): AppPath<i64>,
) -> AppResult<(StatusCode, Json<UserDto>)> {
    let user = state.user_service.get_user(user_id).await?;

    Ok((StatusCode::OK, Json(UserDto::from(user))))
}

#[utoipa::path(
    put,
    path = "/users/{userID}",
    tag = "users",
    security(("bearer_auth" = [])),
    params(("userID" = i64, Path, description = "User id")),
    request_body = UpdateUserDto,
    responses(
        (status = 204, description = "User updated"),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Not the account owner"),
        (status = 404, description = "User not found"),
        (status = 422, description = "Unreadable body"),
        (status = 500, description = "Internal error")
    )
)]
pub(crate) async fn update_user(
    State(state): State<AppState>,
    auth: AuthenticatedUser,
    AppPath(user_id): AppPath<i64>,
    AppJson(dto): AppJson<UpdateUserDto>,
) -> AppResult<StatusCode> {
    // ownership is decided first; the service validates the payload after
    state
        .user_service
        .update_user(
            auth.user_id,
            user_id,
            UpdateUserRequest {
                name: dto.name,
                nick: dto.nick,
                email: dto.email,
            },
        )
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/users/{userID}",
    tag = "users",
    security(("bearer_auth" = [])),
    params(("userID" = i64, Path, description = "User id")),
    responses(
        (status = 204, description = "User deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Not the account owner"),
        (status = 404, description = "User not found"),
        (status = 500, description = "Internal error")
    )
)]
pub(crate) async fn delete_user(
    State(state): State<AppState>,
    auth: AuthenticatedUser,
    AppPath(user_id): AppPath<i64>,
) -> AppResult<StatusCode> {
    state.user_service.delete_user(auth.user_id, user_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    post,
    path = "/users/{userID}/follow",
    tag = "users",
    security(("bearer_auth" = [])),
    params(("userID" = i64, Path, description = "User to follow")),
    responses(
        (status = 204, description = "Following (idempotent)"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Cannot follow yourself"),
        (status = 404, description = "User not found"),
        (status = 500, description = "Internal error")
    )
)]
pub(crate) async fn follow_user(
    State(state): State<AppState>,
    auth: AuthenticatedUser,
    AppPath(user_id): AppPath<i64>,
) -> AppResult<StatusCode> {
    state.user_service.follow_user(auth.user_id, user_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    post,
    path = "/users/{userID}/unfollow",
    tag = "users",
    security(("bearer_auth" = [])),
    params(("userID" = i64, Path, description = "User to unfollow")),
    responses(
        (status = 204, description = "Not following (idempotent)"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Cannot unfollow yourself"),
        (status = 500, description = "Internal error")
    )
)]
pub(crate) async fn unfollow_user(
    State(state): State<AppState>,
    auth: AuthenticatedUser,
    AppPath(user_id): AppPath<i64>,
) -> AppResult<StatusCode> {
    state
        .user_service
        .unfollow_user(auth.user_id, user_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/users/{userID}/followers",
    tag = "users",
    security(("bearer_auth" = [])),
    params(("userID" = i64, Path, description = "User id")),
    responses(
        (status = 200, description = "Followers of the user", body = [UserDto]),
        (status = 401, description = "Unauthorized"),
        (status = 500, description = "Internal error")
    )
)]
pub(crate) async fn list_followers(
    State(state): State<AppState>,
    AppPath(user_id): AppPath<i64>,
) -> AppResult<(StatusCode, Json<Vec<UserDto>>)> {
    let users = state.user_service.followers(user_id).await?;

    Ok((
        StatusCode::OK,
        Json(users.into_iter().map(UserDto::from).collect()),
    ))
}

#[utoipa::path(
    get,
    path = "/users/{userID}/following",
    tag = "users",
    security(("bearer_auth" = [])),
    params(("userID" = i64, Path, description = "User id")),
    responses(
        (status = 200, description = "Users the user follows", body = [UserDto]),
        (status = 401, description = "Unauthorized"),
        (status = 500, description = "Internal error")
    )
)]
pub(crate) async fn list_following(
    State(state): State<AppState>,
    AppPath(user_id): AppPath<i64>,
) -> AppResult<(StatusCode, Json<Vec<UserDto>>)> {
    let users = state.user_service.following(user_id).await?;

    Ok((
        StatusCode::OK,
        Json(users.into_iter().map(UserDto::from).collect()),
    ))
}

#[utoipa::path(
    post,
    path = "/users/{userID}/update-password",
    tag = "users",
    security(("bearer_auth" = [])),
    params(("userID" = i64, Path, description = "User id")),
    request_body = ChangePasswordDto,
    responses(
        (status = 204, description = "Password updated"),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized or current password mismatch"),
        (status = 403, description = "Not the account owner"),
        (status = 422, description = "Unreadable body"),
        (status = 500, description = "Internal error")
    )
)]
pub(crate) async fn update_password(
    State(state): State<AppState>,
    auth: AuthenticatedUser,
    AppPath(user_id): AppPath<i64>,
    AppJson(dto): AppJson<ChangePasswordDto>,
) -> AppResult<StatusCode> {
    // ownership is decided first; the service validates the payload after
    state
        .user_service
        .change_password(
            auth.user_id,
            user_id,
            ChangePasswordRequest {
                current: dto.current,
                new: dto.new,
            },
        )
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
