use axum::Router;
use axum::middleware;
use axum::routing::{get, post};

use crate::presentation::AppState;
use crate::presentation::handlers::users::{
    create_user, delete_user, follow_user, list_followers, list_following, search_users,
    show_user, unfollow_user, update_password, update_user,
};
use crate::presentation::middleware::auth::jwt_auth_middleware;

pub(crate) fn router(state: AppState) -> Router<AppState> {
    // registration is the only public user route
    let public = Router::new().route("/users", post(create_user));

    let protected = Router::new()
        .route("/users", get(search_users))
        .route(
            "/users/{userID}",
            get(show_user).put(update_user).delete(delete_user),
        )
        .route("/users/{userID}/follow", post(follow_user))
        .route("/users/{userID}/unfollow", post(unfollow_user))
        .route("/users/{userID}/followers", get(list_followers))
        .route("/users/{userID}/following", get(list_following))
        .route("/users/{userID}/update-password", post(update_password))
        .layer(middleware::from_fn_with_state(state, jwt_auth_middleware));

    public.merge(protected)
}
