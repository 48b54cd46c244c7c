//! Employee administration API for Crewly.
//!
//! Role-scoped CRUD over employee records plus invitation-by-email
//! onboarding. Super admins manage employees across all companies; company
//! admins manage their own company's. Creating an employee mints a
//! single-use invitation token and mails a password setup link.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod router;
pub mod services;
pub mod validation;

pub use error::ApiEmployeesError;
pub use router::{employees_router, EmployeesState};
pub use services::{EmailSender, MockEmailSender, SmtpConfig, SmtpEmailSender};
