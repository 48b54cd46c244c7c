//! Admin role guard middleware.
//!
//! Employee administration is open to super admins and company admins only.
//! Regular employees have no access path to any of these endpoints, so their
//! requests are rejected as unauthenticated rather than forbidden: there is
//! nothing here they could ever be authorized for.

use crate::error::ApiEmployeesError;
use axum::{body::Body, extract::Request, middleware::Next, response::Response};
use crewly_core::{Actor, Role};

/// Middleware that requires the authenticated actor to be a super admin or a
/// company admin.
///
/// Expects a prior authentication middleware to have inserted an [`Actor`]
/// into the request extensions; a request without one is rejected with 401.
///
/// # Errors
///
/// - `ApiEmployeesError::Unauthorized` (401): no actor in extensions, or the
///   actor's role is employee.
pub async fn admin_guard(request: Request<Body>, next: Next) -> Result<Response, ApiEmployeesError> {
    let actor = request
        .extensions()
        .get::<Actor>()
        .ok_or(ApiEmployeesError::Unauthorized)?;

    if actor.role == Role::Employee {
        tracing::warn!(
            actor_id = %actor.id,
            "Access denied: employee role has no admin access"
        );
        return Err(ApiEmployeesError::Unauthorized);
    }

    tracing::debug!(
        actor_id = %actor.id,
        role = %actor.role,
        "Admin access granted"
    );

    Ok(next.run(request).await)
}
