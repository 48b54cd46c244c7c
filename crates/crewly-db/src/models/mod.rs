//! Database entity models.

pub mod company;
pub mod employee;
pub mod invitation_token;

pub use company::Company;
pub use employee::{Employee, EmployeeChanges, EmployeeState, NewEmployee};
pub use invitation_token::InvitationToken;
