use std::sync::Arc;

use axum::{Json, Router, routing::get};
use serde::Serialize;

use crate::application::auth_service::AuthService;
use crate::application::post_service::PostService;
use crate::application::user_service::UserService;
use crate::infrastructure::jwt::JwtService;

pub(crate) mod app_error;
pub(crate) mod extract;
pub(crate) mod handlers;
pub(crate) mod middleware;
pub(crate) mod openapi;
pub(crate) mod routes;

#[cfg(test)]
mod router_tests;

/// The whole API surface: liveness probe plus the auth, user and post
/// routes, with the shared state already applied.
pub(crate) fn api_router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .merge(routes::router(state.clone()))
        .with_state(state)
}

#[derive(Debug, Serialize)]
struct Liveness {
    status: &'static str,
}

async fn healthz() -> Json<Liveness> {
    Json(Liveness { status: "ok" })
}

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) auth_service: Arc<AuthService>,
    pub(crate) user_service: Arc<UserService>,
    pub(crate) post_service: Arc<PostService>,
    pub(crate) jwt: Arc<JwtService>,
}

impl AppState {
    pub(crate) fn new(
        auth_service: Arc<AuthService>,
        user_service: Arc<UserService>,
        post_service: Arc<PostService>,
        jwt: Arc<JwtService>,
    ) -> Self {
        Self {
            auth_service,
            user_service,
            post_service,
            jwt,
        }
    }
}
