use async_trait::async_trait;
use axum::{
    Json,
    extract::{FromRequestParts, Path, rejection::PathRejection},
    http::request::Parts,
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;

use super::types::ErrorResponse;

/// パスパラメーターのエクストラクター
///
/// `Path<T>`と同じだが、解析に失敗した場合も`ErrorResponse`形式のJSONを返す。
#[derive(Debug)]
pub struct ApiPath<T>(pub T);

/// パスパラメーターを解析できなかった
#[derive(Debug)]
pub struct PathError(PathRejection);

impl IntoResponse for PathError {
    fn into_response(self) -> Response {
        let status = self.0.status();
        let body = Json(ErrorResponse::new("INVALID_PATH", self.0.body_text()));
        (status, body).into_response()
    }
}

#[async_trait]
impl<S, T> FromRequestParts<S> for ApiPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = PathError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(PathError)?;

        Ok(ApiPath(value))
    }
}
