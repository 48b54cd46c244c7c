//! The authenticated actor and its employee visibility scope.
//!
//! Every service operation takes the actor as an explicit parameter; there is
//! no ambient "current user". The actor is constructed once, at the
//! authentication boundary, and its company affiliation invariant is checked
//! there rather than re-derived in every handler.

use crate::{CompanyId, Role, UserId};
use serde::{Deserialize, Serialize};

/// The authenticated caller of an operation.
///
/// Invariant: `company_id` is present exactly when the role is company
/// scoped (company admin or employee). [`Actor::new`] enforces this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    /// The caller's user id.
    pub id: UserId,
    /// The caller's role.
    pub role: Role,
    /// The caller's company, for company-scoped roles.
    pub company_id: Option<CompanyId>,
}

/// Error constructing an [`Actor`] whose company affiliation does not match
/// its role.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ActorError {
    /// A company-scoped role was given without a company id.
    #[error("Role {0} requires a company affiliation")]
    MissingCompany(Role),
    /// A super admin was given a company id.
    #[error("Role {0} must not carry a company affiliation")]
    UnexpectedCompany(Role),
}

impl Actor {
    /// Build an actor, validating the role/company invariant.
    pub fn new(id: UserId, role: Role, company_id: Option<CompanyId>) -> Result<Self, ActorError> {
        match (role.is_company_scoped(), company_id) {
            (true, None) => Err(ActorError::MissingCompany(role)),
            (false, Some(_)) => Err(ActorError::UnexpectedCompany(role)),
            _ => Ok(Self {
                id,
                role,
                company_id,
            }),
        }
    }

    /// Resolve the set of employee records this actor may see.
    ///
    /// Pure function of the actor; the same scope drives list, show, update
    /// and delete. Single-record operations additionally compare the target
    /// record's company against the actor's (see the employee service) so a
    /// company mismatch surfaces as forbidden rather than not-found.
    #[must_use]
    pub fn employee_scope(&self) -> EmployeeScope {
        match (self.role, self.company_id) {
            // Super admins see company admins and employees, never other
            // super admins.
            (Role::SuperAdmin, _) => EmployeeScope::AllEmployees,
            (Role::CompanyAdmin, Some(company)) => EmployeeScope::Company(company),
            // A company admin without a company cannot be constructed; deny
            // rather than panic if one ever appears.
            (Role::CompanyAdmin, None) | (Role::Employee, _) => EmployeeScope::None,
        }
    }
}

/// Which employee records an actor is allowed to see.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmployeeScope {
    /// Every company admin and employee record, across all companies.
    AllEmployees,
    /// Employee records (role employee only) of a single company.
    Company(CompanyId),
    /// No listing access at all; callers must reject before querying.
    None,
}

impl EmployeeScope {
    /// Whether a record with the given role and company falls inside this
    /// scope.
    #[must_use]
    pub fn permits(&self, role: Role, company_id: Option<CompanyId>) -> bool {
        match self {
            EmployeeScope::AllEmployees => role.is_company_scoped(),
            EmployeeScope::Company(own) => {
                role == Role::Employee && company_id == Some(*own)
            }
            EmployeeScope::None => false,
        }
    }
}
