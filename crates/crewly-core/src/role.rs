//! User roles.
//!
//! The original role model used free-form string codes compared with `==`,
//! where an unknown code silently fell through every branch. Here the role
//! set is a closed enum so every role check is exhaustive.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// The three actor roles of the system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Platform operator: manages companies, sees all company admins and
    /// employees.
    SuperAdmin,
    /// Administrator of a single company: manages that company's employees.
    CompanyAdmin,
    /// Regular employee: no access to employee administration.
    Employee,
}

impl Role {
    /// The canonical storage representation of this role.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::SuperAdmin => "super_admin",
            Role::CompanyAdmin => "company_admin",
            Role::Employee => "employee",
        }
    }

    /// Whether this role is affiliated with a single company.
    ///
    /// Super admins operate platform-wide and carry no company id.
    #[must_use]
    pub fn is_company_scoped(&self) -> bool {
        matches!(self, Role::CompanyAdmin | Role::Employee)
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown role code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown role: {0}")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "super_admin" => Ok(Role::SuperAdmin),
            "company_admin" => Ok(Role::CompanyAdmin),
            "employee" => Ok(Role::Employee),
            other => Err(UnknownRole(other.to_string())),
        }
    }
}

// Lets sqlx decode the TEXT role column straight into the enum.
impl TryFrom<String> for Role {
    type Error = UnknownRole;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_str_round_trips() {
        for role in [Role::SuperAdmin, Role::CompanyAdmin, Role::Employee] {
            assert_eq!(role.as_str().parse::<Role>().unwrap(), role);
        }
    }

    #[test]
    fn test_unknown_role_is_an_error() {
        let err = "CA".parse::<Role>().unwrap_err();
        assert_eq!(err, UnknownRole("CA".to_string()));
        assert!("".parse::<Role>().is_err());
    }

    #[test]
    fn test_company_scoping() {
        assert!(!Role::SuperAdmin.is_company_scoped());
        assert!(Role::CompanyAdmin.is_company_scoped());
        assert!(Role::Employee.is_company_scoped());
    }

    #[test]
    fn test_serde_uses_snake_case() {
        let json = serde_json::to_string(&Role::CompanyAdmin).unwrap();
        assert_eq!(json, "\"company_admin\"");
        let role: Role = serde_json::from_str("\"super_admin\"").unwrap();
        assert_eq!(role, Role::SuperAdmin);
    }
}
