//! Caller identity extractor.
//!
//! The review API trusts an upstream proxy or client to name the caller
//! in the `X-Actor-Id` header. `x-request-id`, when present, becomes the
//! correlation id of the command.

use async_trait::async_trait;
use axum::{
    extract::FromRequestParts,
    http::{request::Parts, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::domain::foundation::{CommandMetadata, UserId};

pub const ACTOR_HEADER: &str = "x-actor-id";
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Extractor that requires a caller identity.
///
/// ```ignore
/// async fn my_handler(actor: Actor) -> impl IntoResponse {
///     format!("Hello, {}!", actor.user)
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Actor {
    pub user: UserId,
    request_id: Option<String>,
}

impl Actor {
    /// Command metadata for this request, sourced from "http".
    pub fn metadata(&self) -> CommandMetadata {
        let metadata = CommandMetadata::new(self.user.clone()).with_source("http");
        match &self.request_id {
            Some(id) => metadata.with_correlation_id(id.clone()),
            None => metadata,
        }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for Actor
where
    S: Send + Sync,
{
    type Rejection = ActorRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let raw = parts
            .headers
            .get(ACTOR_HEADER)
            .ok_or(ActorRejection::Missing)?
            .to_str()
            .map_err(|_| ActorRejection::Invalid("header is not valid UTF-8".to_string()))?;

        let user = UserId::new(raw).map_err(|e| ActorRejection::Invalid(e.to_string()))?;

        let request_id = parts
            .headers
            .get(REQUEST_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        Ok(Actor { user, request_id })
    }
}

/// Rejection type for a missing or malformed caller identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActorRejection {
    Missing,
    Invalid(String),
}

impl IntoResponse for ActorRejection {
    fn into_response(self) -> Response {
        let message = match self {
            ActorRejection::Missing => format!("{} header is required", ACTOR_HEADER),
            ActorRejection::Invalid(reason) => format!("Invalid {}: {}", ACTOR_HEADER, reason),
        };

        (
            StatusCode::UNAUTHORIZED,
            Json(serde_json::json!({
                "code": "UNAUTHENTICATED",
                "message": message
            })),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    async fn extract(request: Request<()>) -> Result<Actor, ActorRejection> {
        let (mut parts, _) = request.into_parts();
        Actor::from_request_parts(&mut parts, &()).await
    }

    #[tokio::test]
    async fn reads_actor_header() {
        let request = Request::builder()
            .header(ACTOR_HEADER, "maintainer-1")
            .body(())
            .unwrap();

        let actor = extract(request).await.unwrap();

        assert_eq!(actor.user.as_str(), "maintainer-1");
        assert_eq!(actor.metadata().source(), Some("http"));
    }

    #[tokio::test]
    async fn request_id_becomes_correlation_id() {
        let request = Request::builder()
            .header(ACTOR_HEADER, "maintainer-1")
            .header(REQUEST_ID_HEADER, "req-42")
            .body(())
            .unwrap();

        let actor = extract(request).await.unwrap();

        assert_eq!(actor.metadata().correlation_id(), "req-42");
    }

    #[tokio::test]
    async fn missing_header_is_rejected() {
        let request = Request::builder().body(()).unwrap();
        assert_eq!(extract(request).await.unwrap_err(), ActorRejection::Missing);
    }

    #[tokio::test]
    async fn blank_header_is_rejected() {
        let request = Request::builder()
            .header(ACTOR_HEADER, "   ")
            .body(())
            .unwrap();
        assert!(matches!(
            extract(request).await.unwrap_err(),
            ActorRejection::Invalid(_)
        ));
    }

    #[test]
    fn rejection_is_unauthorized() {
        let response = ActorRejection::Missing.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
