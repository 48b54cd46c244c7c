//! JWT authentication for the Crewly API.
//!
//! Issues and verifies HS256 access tokens whose claims carry the caller's
//! role and company affiliation, and provides the axum middleware that turns
//! a bearer token into an [`Actor`](crewly_core::Actor) in request
//! extensions.

pub mod claims;
pub mod error;
pub mod jwt;
pub mod middleware;

pub use claims::AuthClaims;
pub use error::AuthError;
pub use jwt::{JwtIssuer, JwtVerifier};
pub use middleware::jwt_auth_middleware;
