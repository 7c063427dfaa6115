use axum::Router;
use axum::middleware;
use axum::routing::{get, post};

use crate::presentation::AppState;
use crate::presentation::handlers::posts::{
    create_post, delete_post, deslike_post, feed, like_post, posts_by_user, show_post,
    update_post,
};
use crate::presentation::middleware::auth::jwt_auth_middleware;

pub(crate) fn router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/posts", post(create_post).get(feed))
        .route(
            "/posts/{postID}",
            get(show_post).put(update_post).delete(delete_post),
        )
        .route("/posts/{postID}/like", post(like_post))
        .route("/posts/{postID}/deslike", post(deslike_post))
        .route("/users/{userID}/posts", get(posts_by_user))
        .layer(middleware::from_fn_with_state(state, jwt_auth_middleware))
}
