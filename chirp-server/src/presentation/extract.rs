use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;

use crate::presentation::app_error::AppError;

/// JSON body extractor that keeps the transport-level failure split: a body
/// that cannot be read at all is 422, a body that does not decode is 400.
pub(crate) struct AppJson<T>(pub(crate) T);

impl<S, T> FromRequest<S> for AppJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(AppJson(value)),
            Err(JsonRejection::BytesRejection(_)) => Err(AppError::UnreadableBody),
            Err(rejection) => Err(AppError::BadRequest(rejection.to_string())),
        }
    }
}

/// Path extractor whose rejection is rendered through the JSON error
/// envelope instead of axum's plain-text default.
pub(crate) struct AppPath<T>(pub(crate) T);

impl<S, T> FromRequestParts<S> for AppPath<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<T>::from_request_parts(parts, state).await {
            Ok(Path(value)) => Ok(AppPath(value)),
            Err(PathRejection::FailedToDeserializePathParams(inner)) => {
                Err(AppError::BadRequest(inner.to_string()))
            }
            Err(rejection) => Err(AppError::BadRequest(rejection.to_string())),
        }
    }
}
