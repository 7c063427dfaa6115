use axum::{Json, extract::State, http::StatusCode};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::post::{CreatePostRequest, Post, UpdatePostRequest};
use crate::presentation::AppState;
use crate::presentation::app_error::AppResult;
use crate::presentation::extract::{AppJson, AppPath};
use crate::presentation::middleware::auth::AuthenticatedUser;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub(crate) struct CreatePostDto {
    #[validate(length(min = 1, max = 255))]
    pub(crate) title: String,
    #[validate(length(min = 1))]
    pub(crate) content: String,
}

/// Validated by the domain request type, after the ownership check.
#[derive(Debug, Deserialize, ToSchema)]
pub(crate) struct UpdatePostDto {
    pub(crate) title: String,
    pub(crate) content: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct PostDto {
    pub(crate) id: i64,
    pub(crate) title: String,
    pub(crate) content: String,
    pub(crate) author_id: i64,
    pub(crate) author_nick: String,
    pub(crate) likes: i64,
    pub(crate) created_at: DateTime<Utc>,
}

impl From<Post> for PostDto {
    fn from(post: Post) -> Self {
        Self {
            id: post.id,
            title: post.title,
            content: post.content,
            author_id: post.author_id,
            author_nick: post.author_nick,
            likes: post.likes,
            created_at: post.created_at,
        }
    }
}

#[utoipa::path(
    post,
    path = "/posts",
    tag = "posts",
    security(("bearer_auth" = [])),
    request_body = CreatePostDto,
    responses(
        (status = 201, description = "Post created", body = PostDto),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 422, description = "Unreadable body"),
        (status = 500, description = "Internal error")
    )
)]
pub(crate) async fn create_post(
    State(state): State<AppState>,
    auth: AuthenticatedUser,
    AppJson(dto): AppJson<CreatePostDto>,
) -> AppResult<(StatusCode, Json<PostDto>)> {
    dto.validate()?;

    let post = state
        .post_service
        .create_post(
            auth.user_id,
            CreatePostRequest {
                title: dto.title,
                content: dto.content,
            },
        )
        .await?;

    Ok((StatusCode::CREATED, Json(PostDto::from(post))))
}

#[utoipa::path(
    get,
    path = "/posts",
    tag = "posts",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Feed: posts by the caller and everyone they follow, newest first", body = [PostDto]),
        (status = 401, description = "Unauthorized"),
        (status = 500, description = "Internal error")
    )
)]
pub(crate) async fn feed(
    State(state): State<AppState>,
    auth: AuthenticatedUser,
) -> AppResult<(StatusCode, Json<Vec<PostDto>>)> {
    let posts = state.post_service.feed(auth.user_id).await?;

    Ok((
        StatusCode::OK,
        Json(posts.into_iter().map(PostDto::from).collect()),
    ))
}

#[utoipa::path(
    get,
    path = "/posts/{postID}",
    tag = "posts",
    security(("bearer_auth" = [])),
    params(("postID" = i64, Path, description = "Post id")),
    responses(
        (status = 200, description = "Post found", body = PostDto),
        (status = 400, description = "Malformed id"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Post not found"),
        (status = 500, description = "Internal error")
    )
)]
pub(crate) async fn show_post(
    State(state): State<AppState>,
    AppPath(post_id): AppPath<i64>,
) -> AppResult<(StatusCode, Json<PostDto>)> {
    let post = state.post_service.get_post(post_id).await?;

    Ok((StatusCode::OK, Json(PostDto::from(post))))
}

#[utoipa::path(
    put,
    path = "/posts/{postID}",
    tag = "posts",
    security(("bearer_auth" = [])),
    params(("postID" = i64, Path, description = "Post id")),
    request_body = UpdatePostDto,
    responses(
        (status = 204, description = "Post updated"),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Not the author"),
        (status = 404, description = "Post not found"),
        (status = 422, description = "Unreadable body"),
        (status = 500, description = "Internal error")
    )
)]
pub(crate) async fn update_post(
    State(state): State<AppState>,
    auth: AuthenticatedUser,
    AppPath(post_id): AppPath<i64>,
    AppJson(dto): AppJson<UpdatePostDto>,
) -> AppResult<StatusCode> {
    // ownership is decided first; the service validates the payload after
    state
        .post_service
        .update_post(
            auth.user_id,
            post_id,
            UpdatePostRequest {
                title: dto.title,
                content: dto.content,
            },
        )
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/posts/{postID}",
    tag = "posts",
    security(("bearer_auth" = [])),
    params(("postID" = i64, Path, description = "Post id")),
    responses(
        (status = 204, description = "Post deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Not the author"),
        (status = 404, description = "Post not found"),
        (status = 500, description = "Internal error")
    )
)]
pub(crate) async fn delete_post(
    State(state): State<AppState>,
    auth: AuthenticatedUser,
    AppPath(post_id): AppPath<i64>,
) -> AppResult<StatusCode> {
    state.post_service.delete_post(auth.user_id, post_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/users/{userID}/posts",
    tag = "posts",
    security(("bearer_auth" = [])),
    params(("userID" = i64, Path, description = "Author id")),
    responses(
        (status = 200, description = "Posts authored by the user", body = [PostDto]),
        (status = 401, description = "Unauthorized"),
        (status = 500, description = "Internal error")
    )
)]
pub(crate) async fn posts_by_user(
    State(state): State<AppState>,
    AppPath(user_id): AppPath<i64>,
) -> AppResult<(StatusCode, Json<Vec<PostDto>>)> {
    let posts = state.post_service.posts_by_user(user_id).await?;

    Ok((
        StatusCode::OK,
        Json(posts.into_iter().map(PostDto::from).collect()),
    ))
}

#[utoipa::path(
    post,
    path = "/posts/{postID}/like",
    tag = "posts",
    security(("bearer_auth" = [])),
    params(("postID" = i64, Path, description = "Post id")),
    responses(
        (status = 204, description = "Like counted"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Post not found"),
        (status = 500, description = "Internal error")
    )
)]
pub(crate) async fn like_post(
    State(state): State<AppState>,
    AppPath(post_id): AppPath<i64>,
) -> AppResult<StatusCode> {
    state.post_service.like_post(post_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    post,
    path = "/posts/{postID}/deslike",
    tag = "posts",
    security(("bearer_auth" = [])),
    params(("postID" = i64, Path, description = "Post id")),
    responses(
        (status = 204, description = "Like removed, floored at zero"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Post not found"),
        (status = 500, description = "Internal error")
    )
)]
pub(crate) async fn deslike_post(
    State(state): State<AppState>,
    AppPath(post_id): AppPath<i64>,
) -> AppResult<StatusCode> {
    state.post_service.deslike_post(post_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
