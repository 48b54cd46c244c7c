//! JWT claims carrying the actor identity.
//!
//! Standard RFC 7519 claims plus the crewly-specific role and company
//! affiliation. The claims are the only place the actor crosses the wire;
//! inside the service the [`Actor`] type is used exclusively.

use chrono::{Duration, Utc};
use crewly_core::{Actor, ActorError, CompanyId, Role, UserId};
use serde::{Deserialize, Serialize};

/// JWT claims for an authenticated crewly user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthClaims {
    /// Subject: the user id.
    pub sub: UserId,
    /// Issuer.
    pub iss: String,
    /// Issued-at (Unix seconds).
    pub iat: i64,
    /// Expiration (Unix seconds).
    pub exp: i64,
    /// The user's role.
    pub role: Role,
    /// Company affiliation, present for company-scoped roles.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_id: Option<CompanyId>,
}

impl AuthClaims {
    /// Build claims for an actor, valid for `ttl` from now.
    #[must_use]
    pub fn for_actor(actor: &Actor, issuer: impl Into<String>, ttl: Duration) -> Self {
        let now = Utc::now();
        Self {
            sub: actor.id,
            iss: issuer.into(),
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
            role: actor.role,
            company_id: actor.company_id,
        }
    }

    /// Reconstruct the actor, re-checking the role/company invariant.
    ///
    /// A token whose company affiliation contradicts its role is rejected
    /// here rather than trusted downstream.
    pub fn actor(&self) -> Result<Actor, ActorError> {
        Actor::new(self.sub, self.role, self.company_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claims_round_trip_to_actor() {
        let actor = Actor::new(UserId::new(), Role::CompanyAdmin, Some(CompanyId::new())).unwrap();
        let claims = AuthClaims::for_actor(&actor, "crewly", Duration::hours(1));
        assert_eq!(claims.actor().unwrap(), actor);
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_inconsistent_claims_are_rejected() {
        let claims = AuthClaims {
            sub: UserId::new(),
            iss: "crewly".to_string(),
            iat: 0,
            exp: i64::MAX,
            role: Role::CompanyAdmin,
            company_id: None,
        };
        assert!(claims.actor().is_err());
    }

    #[test]
    fn test_company_id_omitted_for_super_admin() {
        let actor = Actor::new(UserId::new(), Role::SuperAdmin, None).unwrap();
        let claims = AuthClaims::for_actor(&actor, "crewly", Duration::hours(1));
        let json = serde_json::to_string(&claims).unwrap();
        assert!(!json.contains("company_id"));
    }
}
