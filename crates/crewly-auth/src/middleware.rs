//! Bearer authentication middleware.
//!
//! Verifies the `Authorization: Bearer` token and inserts the resulting
//! [`Actor`] into request extensions, where downstream guards and handlers
//! extract it. Authorization (which roles may do what) lives with the
//! endpoints, not here.

use crate::{AuthError, JwtVerifier};
use axum::{
    body::Body,
    extract::Request,
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
    Extension,
};
use std::sync::Arc;

/// Middleware that authenticates the request and attaches the [`Actor`].
///
/// # Errors
///
/// Returns 401 for a missing header, a malformed or invalid token, or
/// claims whose company affiliation contradicts their role.
///
/// [`Actor`]: crewly_core::Actor
pub async fn jwt_auth_middleware(
    Extension(verifier): Extension<Arc<JwtVerifier>>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, AuthError> {
    let token = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .ok_or(AuthError::MissingToken)?;

    let claims = verifier.verify(token)?;
    let actor = claims.actor()?;

    tracing::debug!(actor_id = %actor.id, role = %actor.role, "Request authenticated");

    request.extensions_mut().insert(actor);
    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AuthClaims, JwtIssuer};
    use axum::{http::StatusCode, middleware, routing::get, Router};
    use chrono::Duration;
    use crewly_core::{Actor, Role, UserId};
    use tower::util::ServiceExt;

    async fn whoami(Extension(actor): Extension<Actor>) -> String {
        actor.role.to_string()
    }

    fn app() -> Router {
        let verifier = Arc::new(JwtVerifier::new("secret", "crewly"));
        Router::new()
            .route("/", get(whoami))
            .layer(middleware::from_fn(jwt_auth_middleware))
            .layer(Extension(verifier))
    }

    fn bearer(actor: &Actor) -> String {
        let claims = AuthClaims::for_actor(actor, "crewly", Duration::hours(1));
        let token = JwtIssuer::new("secret").issue(&claims).unwrap();
        format!("Bearer {token}")
    }

    #[tokio::test]
    async fn test_valid_token_passes_and_actor_is_available() {
        let actor = Actor::new(UserId::new(), Role::SuperAdmin, None).unwrap();
        let request = Request::builder()
            .uri("/")
            .header(AUTHORIZATION, bearer(&actor))
            .body(Body::empty())
            .unwrap();

        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_missing_header_is_unauthorized() {
        let request = Request::builder().uri("/").body(Body::empty()).unwrap();
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_garbage_token_is_unauthorized() {
        let request = Request::builder()
            .uri("/")
            .header(AUTHORIZATION, "Bearer not.a.jwt")
            .body(Body::empty())
            .unwrap();
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
