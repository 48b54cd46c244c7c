//! Core types for the crewly HR administration platform.
//!
//! This crate is dependency-light on purpose: it defines the strongly typed
//! identifiers, the closed role set, and the authenticated actor with its
//! employee visibility scope. Everything else (persistence, HTTP, mail)
//! builds on these types.

mod actor;
mod ids;
mod role;

pub use actor::{Actor, ActorError, EmployeeScope};
pub use ids::{CompanyId, ParseIdError, UserId};
pub use role::{Role, UnknownRole};
