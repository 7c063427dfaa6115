use axum::{Router, routing::post};

use crate::presentation::AppState;
use crate::presentation::handlers::auth::login;

pub(crate) fn router() -> Router<AppState> {
    Router::new().route("/login", post(login))
}
