use crate::domain::{CallerIdentity, value_objects::MemberId};
use async_trait::async_trait;
use axum::{
    Json,
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Response},
};
use uuid::Uuid;

use super::types::ErrorResponse;

/// 認証済み会員IDを運ぶヘッダー
///
/// 認証は前段のゲートウェイで済んでいる前提。
pub const MEMBER_ID_HEADER: &str = "x-member-id";

/// 呼び出し元の会員を表すエクストラクター
#[derive(Debug, Clone, Copy)]
pub struct AuthenticatedCaller(pub CallerIdentity);

/// 呼び出し元を特定できなかった
#[derive(Debug)]
pub enum CallerRejection {
    MissingHeader,
    InvalidMemberId,
}

impl IntoResponse for CallerRejection {
    fn into_response(self) -> Response {
        let message = match self {
            CallerRejection::MissingHeader => format!("{} header is required", MEMBER_ID_HEADER),
            CallerRejection::InvalidMemberId => {
                format!("{} header must be a UUID", MEMBER_ID_HEADER)
            }
        };

        let body = Json(ErrorResponse::new("UNAUTHENTICATED", message));
        (StatusCode::UNAUTHORIZED, body).into_response()
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthenticatedCaller
where
    S: Send + Sync,
{
    type Rejection = CallerRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let value = parts
            .headers
            .get(MEMBER_ID_HEADER)
            .ok_or(CallerRejection::MissingHeader)?;

        let member_id = value
            .to_str()
            .ok()
            .and_then(|s| Uuid::parse_str(s.trim()).ok())
            .map(MemberId::from_uuid)
            .ok_or(CallerRejection::InvalidMemberId)?;

        Ok(AuthenticatedCaller(CallerIdentity::new(member_id)))
    }
}
